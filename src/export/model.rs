// src/export/model.rs

use crate::core::calculator::DelayResult;
use crate::core::calculator::timeline::{Timeline, TimelineEntry};
use crate::utils::time::format_hours;
use serde::Serialize;

/// Text written in place of a delay when the status chain is broken.
pub const MISMATCH_SENTINEL: &str = "Status mismatch!";

/// Flat report row, one per status change.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StatusRowExport {
    #[serde(rename = "Updater")]
    pub updater: String,
    #[serde(rename = "Entry Time")]
    pub entry_time: String,
    #[serde(rename = "From Status")]
    pub from_status: String,
    #[serde(rename = "To Status")]
    pub to_status: String,
    #[serde(rename = "Status Note")]
    pub status_note: String,
    #[serde(rename = "Effective Time")]
    pub effective_time: String,
    #[serde(rename = "Status Hours")]
    pub status_hours: String,
    #[serde(rename = "Update Delay")]
    pub update_delay: String,
}

impl From<&TimelineEntry> for StatusRowExport {
    fn from(e: &TimelineEntry) -> Self {
        Self {
            updater: e.update.updater.clone(),
            entry_time: e.update.entry_time_str(),
            from_status: e.update.from_status_str().to_string(),
            to_status: e.update.to_status.clone(),
            status_note: e.update.note_str().to_string(),
            effective_time: e.update.effective_time_str(),
            status_hours: render_delay(&e.status_hours),
            update_delay: render_delay(&e.update_delay),
        }
    }
}

impl StatusRowExport {
    pub fn from_timeline(timeline: &Timeline) -> Vec<Self> {
        timeline.entries.iter().map(Self::from).collect()
    }
}

pub fn render_delay(d: &DelayResult) -> String {
    match d {
        DelayResult::Hours(h) => format_hours(*h),
        DelayResult::Mismatch => MISMATCH_SENTINEL.to_string(),
    }
}

/// Header for CSV / XLSX, in column order.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Updater",
        "Entry Time",
        "From Status",
        "To Status",
        "Status Note",
        "Effective Time",
        "Status Hours",
        "Update Delay",
    ]
}

pub(crate) fn row_to_cells(r: &StatusRowExport) -> Vec<String> {
    vec![
        r.updater.clone(),
        r.entry_time.clone(),
        r.from_status.clone(),
        r.to_status.clone(),
        r.status_note.clone(),
        r.effective_time.clone(),
        r.status_hours.clone(),
        r.update_delay.clone(),
    ]
}
