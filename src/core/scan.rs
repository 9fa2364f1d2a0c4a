//! Clause scan over the flattened document text.
//!
//! Works on documents without a usable Updates table: every
//! `from <A> to <B>` clause built from the status keywords is searched for
//! and its `(effective ...)` timestamp read from the same line.

use crate::errors::AppResult;
use crate::utils::time::{format_timestamp, parse_timestamp};
use chrono::NaiveDateTime;

/// Status every ticket starts in; searched as a bare `to <status>` clause.
pub const INITIAL_STATUS: &str = "Opened";

const EFFECTIVE_MARKER: &str = "(effective";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub from: Option<String>,
    pub to: String,
}

impl Clause {
    pub fn text(&self) -> String {
        match &self.from {
            Some(from) => format!("from {} to {}", from, self.to),
            None => format!("to {}", self.to),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRow {
    pub from: Option<String>,
    pub to: String,
    pub effective: NaiveDateTime,
}

impl ScanRow {
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.from.clone().unwrap_or_else(|| "None".to_string()),
            self.to.clone(),
            format_timestamp(&self.effective),
        ]
    }
}

pub const SCAN_HEADERS: [&str; 3] = ["From Status", "To Status", "Effective Time"];

/// Every ordered pair of distinct keywords, plus the initial clause.
pub fn build_clauses(keywords: &[String]) -> Vec<Clause> {
    let mut clauses = Vec::new();

    for from in keywords {
        for to in keywords {
            if from != to {
                clauses.push(Clause {
                    from: Some(from.clone()),
                    to: to.clone(),
                });
            }
        }
    }

    clauses.push(Clause {
        from: None,
        to: INITIAL_STATUS.to_string(),
    });

    clauses
}

/// From `idx`, the text up to the end of the first line carrying AM/PM.
fn snippet_from(text: &str, idx: usize) -> Option<&str> {
    let mut end = idx;
    for line in text[idx..].split_inclusive('\n') {
        end += line.len();
        if line.contains("AM") || line.contains("PM") {
            return Some(text[idx..end].trim_end());
        }
    }
    None
}

fn effective_fragment(snippet: &str) -> Option<&str> {
    let start = snippet.find(EFFECTIVE_MARKER)? + EFFECTIVE_MARKER.len();
    let len = snippet[start..].find(')')?;
    Some(snippet[start..start + len].trim())
}

/// True when the bare initial clause at `idx` is the tail of a longer
/// `from <A> to <initial>` clause already counted.
fn is_clause_tail(text: &str, idx: usize, keywords: &[String]) -> bool {
    let before = &text[..idx];
    keywords
        .iter()
        .any(|k| before.ends_with(&format!("from {k} ")))
}

/// Find every clause occurrence and return rows sorted by effective time.
///
/// Occurrences without an `(effective ...)` fragment are ignored; a
/// fragment that is not a timestamp is an error.
pub fn scan_text(text: &str, keywords: &[String]) -> AppResult<Vec<ScanRow>> {
    let mut rows = Vec::new();

    for clause in build_clauses(keywords) {
        let needle = clause.text();
        let mut from = 0;

        while let Some(pos) = text[from..].find(&needle) {
            let idx = from + pos;
            from = idx + needle.len();

            if clause.from.is_none() && is_clause_tail(text, idx, keywords) {
                continue;
            }

            let Some(fragment) = snippet_from(text, idx).and_then(effective_fragment) else {
                continue;
            };

            rows.push(ScanRow {
                from: clause.from.clone(),
                to: clause.to.clone(),
                effective: parse_timestamp(fragment)?,
            });
        }
    }

    rows.sort_by_key(|r| r.effective);
    Ok(rows)
}
