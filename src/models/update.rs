use crate::utils::time::format_timestamp;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One status change read from the Updates table of a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateRecord {
    pub updater: String,
    pub entry_time: NaiveDateTime, // ⇔ first cell of the row, when the update was logged
    pub from_status: Option<String>, // None for the initial "set the status" entry
    pub to_status: String,
    pub status_note: Option<String>,
    pub effective_time: NaiveDateTime, // ⇔ "(effective ...)" fragment
}

impl UpdateRecord {
    pub fn from_status_str(&self) -> &str {
        self.from_status.as_deref().unwrap_or("None")
    }

    pub fn note_str(&self) -> &str {
        self.status_note.as_deref().unwrap_or("")
    }

    pub fn entry_time_str(&self) -> String {
        format_timestamp(&self.entry_time)
    }

    pub fn effective_time_str(&self) -> String {
        format_timestamp(&self.effective_time)
    }

    /// True when this record continues the chain left by `previous`.
    pub fn follows(&self, previous: &UpdateRecord) -> bool {
        self.from_status.as_deref() == Some(previous.to_status.as_str())
    }
}
