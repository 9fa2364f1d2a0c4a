//! Time utilities: parsing HH:MM, ticket timestamps, formatting hours, etc.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, NaiveTime, Timelike};

/// Format used for every timestamp written to a report.
pub const REPORT_TIMESTAMP_FORMAT: &str = "%m/%d/%y %I:%M %p";

/// Formats accepted when reading timestamps from a ticket, tried in order.
const TIMESTAMP_FORMATS: [&str; 5] = [
    "%m/%d/%y %I:%M %p",
    "%m/%d/%y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%y %H:%M",
];

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_required_time(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Parse a ticket timestamp such as `03/01/23 09:15 AM`.
///
/// Whitespace runs are collapsed and the meridiem is case-insensitive.
/// Seconds are dropped: the tool works at minute granularity.
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    let normalized = s
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase();

    for fmt in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, fmt) {
            return dt
                .with_second(0)
                .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()));
        }
    }

    Err(AppError::InvalidTimestamp(s.trim().to_string()))
}

pub fn format_timestamp(dt: &NaiveDateTime) -> String {
    dt.format(REPORT_TIMESTAMP_FORMAT).to_string()
}

/// Fractional hours rendered with two decimals.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}
