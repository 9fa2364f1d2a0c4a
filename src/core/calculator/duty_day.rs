//! Duty-day window and holiday calendar used by the delay calculator.

use crate::errors::{AppError, AppResult};
use crate::utils::date::is_weekday;
use chrono::{NaiveDate, NaiveTime, TimeDelta};
use std::collections::BTreeSet;

/// Daily recurring work interval, identical for every duty day.
/// `start < end`, no overnight windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyDayWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl DutyDayWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> AppResult<Self> {
        if start >= end {
            return Err(AppError::InvalidDutyWindow(format!(
                "{}-{}",
                start.format("%H:%M"),
                end.format("%H:%M")
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Length of one full duty day.
    pub fn length(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Calendar dates excluded from duty-day accounting regardless of weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    pub fn new<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// A weekday that is not a holiday.
    pub fn is_duty_day(&self, date: NaiveDate) -> bool {
        is_weekday(date) && !self.contains(date)
    }
}
