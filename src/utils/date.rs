use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_date_with_format(s: &str, fmt: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), fmt).map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Monday to Friday.
pub fn is_weekday(d: NaiveDate) -> bool {
    !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}
