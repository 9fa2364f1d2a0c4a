//! Ticket extraction: locate the Details and Updates tables of a document
//! and turn the free-text update cells into `UpdateRecord`s.

use crate::docx::{Block, DocumentBody};
use crate::errors::{AppError, AppResult};
use crate::models::ticket::{Ticket, TicketDetails};
use crate::models::update::UpdateRecord;
use crate::utils::time::parse_timestamp;
use chrono::NaiveDateTime;
use regex::{Captures, Regex};

pub const DETAILS_TABLE: &str = "Details";
pub const UPDATES_TABLE: &str = "Updates";

/// Marker phrase of every status-change line.
const STATUS_PHRASE: &str = "the status of";

const CHANGED_TEMPLATE: &str = r"(?i)^(?P<updater>.+?)\s+changed the status of\s+(?P<subject>.+?)\s+from\s+(?P<from>.+?)\s+to\s+(?P<to>.+?)(?:\s*\((?P<note>[^()]*)\))?\s*\(effective\s+(?P<effective>[^()]+)\)\s*\.?$";

const SET_TEMPLATE: &str = r"(?i)^(?P<updater>.+?)\s+set the status of\s+(?P<subject>.+?)\s+to\s+(?P<to>.+?)(?:\s*\((?P<note>[^()]*)\))?\s*\(effective\s+(?P<effective>[^()]+)\)\s*\.?$";

/// Grammar over the fixed update phrases:
///
/// - `<who> changed the status of <subject> from <A> to <B> [(<note>)] (effective <time>)`
/// - `<who> set the status of <subject> to <B> [(<note>)] (effective <time>)`
pub struct UpdateGrammar {
    changed: Regex,
    set: Regex,
}

impl UpdateGrammar {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            changed: compile(CHANGED_TEMPLATE)?,
            set: compile(SET_TEMPLATE)?,
        })
    }

    /// Parse one line of an update cell.
    ///
    /// Lines without the status phrase are comments and yield `Ok(None)`.
    /// A line carrying the phrase that fits no template is an error naming
    /// the fragment.
    pub fn parse_line(
        &self,
        line: &str,
        entry_time: NaiveDateTime,
    ) -> AppResult<Option<UpdateRecord>> {
        let line = line.trim();
        if !line.to_lowercase().contains(STATUS_PHRASE) {
            return Ok(None);
        }

        if let Some(caps) = self.changed.captures(line) {
            return build_record(&caps, Some(field(&caps, "from")), entry_time).map(Some);
        }

        if let Some(caps) = self.set.captures(line) {
            return build_record(&caps, None, entry_time).map(Some);
        }

        Err(AppError::UpdateParse(line.to_string()))
    }
}

fn compile(pattern: &str) -> AppResult<Regex> {
    Regex::new(pattern).map_err(|e| AppError::Other(e.to_string()))
}

fn field(caps: &Captures<'_>, name: &str) -> String {
    caps.name(name)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

fn build_record(
    caps: &Captures<'_>,
    from_status: Option<String>,
    entry_time: NaiveDateTime,
) -> AppResult<UpdateRecord> {
    let note = field(caps, "note");

    Ok(UpdateRecord {
        updater: field(caps, "updater"),
        entry_time,
        from_status,
        to_status: field(caps, "to"),
        status_note: (!note.is_empty()).then_some(note),
        effective_time: parse_timestamp(&field(caps, "effective"))?,
    })
}

fn is_title(text: &str, title: &str) -> bool {
    text.trim().trim_end_matches(':').trim().eq_ignore_ascii_case(title)
}

/// Rows of the first table titled `title`, title row excluded.
///
/// A table is titled either by its own first cell or by the paragraph
/// right before it.
pub fn find_table<'a>(body: &'a DocumentBody, title: &str) -> Option<&'a [Vec<String>]> {
    let mut previous: Option<&str> = None;

    for block in &body.blocks {
        match block {
            Block::Paragraph(p) => previous = Some(p.as_str()),
            Block::Table(rows) => {
                let first_cell = rows.first().and_then(|r| r.first());
                if first_cell.is_some_and(|c| is_title(c, title)) {
                    return Some(&rows[1..]);
                }
                if previous.is_some_and(|p| is_title(p, title)) {
                    return Some(rows);
                }
                previous = None;
            }
        }
    }

    None
}

/// `key | value` rows, possibly two pairs per row.
pub fn parse_details(rows: &[Vec<String>]) -> TicketDetails {
    let mut fields = Vec::new();

    for row in rows {
        for pair in row.chunks(2) {
            if let [key, value] = pair {
                let key = key.trim().trim_end_matches(':').trim();
                if !key.is_empty() {
                    fields.push((key.to_string(), value.trim().to_string()));
                }
            }
        }
    }

    TicketDetails { fields }
}

/// Update rows: entry time in the first cell, free text in the last one.
/// Rows whose first cell is not a timestamp (headers) are skipped.
pub fn parse_updates(
    rows: &[Vec<String>],
    grammar: &UpdateGrammar,
) -> AppResult<Vec<UpdateRecord>> {
    let mut updates = Vec::new();

    for row in rows {
        if row.len() < 2 {
            continue;
        }

        let Ok(entry_time) = parse_timestamp(&row[0]) else {
            continue;
        };

        for line in row[row.len() - 1].lines() {
            if let Some(update) = grammar.parse_line(line, entry_time)? {
                updates.push(update);
            }
        }
    }

    Ok(updates)
}

pub fn extract_ticket(body: &DocumentBody) -> AppResult<Ticket> {
    let details_rows = find_table(body, DETAILS_TABLE)
        .ok_or_else(|| AppError::MissingTable(DETAILS_TABLE.to_string()))?;
    let update_rows = find_table(body, UPDATES_TABLE)
        .ok_or_else(|| AppError::MissingTable(UPDATES_TABLE.to_string()))?;

    let grammar = UpdateGrammar::new()?;

    Ok(Ticket {
        details: parse_details(details_rows),
        updates: parse_updates(update_rows, &grammar)?,
    })
}
