//! Business-hours aware delay between two timestamps.

use crate::core::calculator::duty_day::{DutyDayWindow, HolidaySet};
use crate::core::calculator::priority::{PriorityRule, PriorityRules};
use crate::errors::AppResult;
use crate::utils::date::is_weekday;
use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

/// Outcome of a delay computation for one report row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DelayResult {
    Hours(f64),
    /// The record's from-status does not continue the previous to-status.
    Mismatch,
}

impl DelayResult {
    pub fn hours(&self) -> Option<f64> {
        match self {
            DelayResult::Hours(h) => Some(*h),
            DelayResult::Mismatch => None,
        }
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, DelayResult::Mismatch)
    }
}

/// Read-only calendar configuration shared by every computation of a run.
#[derive(Debug, Clone)]
pub struct DelayPolicy {
    pub rules: PriorityRules,
    pub window: DutyDayWindow,
    pub holidays: HolidaySet,
}

impl DelayPolicy {
    pub fn new(rules: PriorityRules, window: DutyDayWindow, holidays: HolidaySet) -> Self {
        Self {
            rules,
            window,
            holidays,
        }
    }

    pub fn rule(&self, priority: &str) -> AppResult<&PriorityRule> {
        self.rules.get(priority)
    }

    pub fn delay_hours(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        priority: &str,
    ) -> AppResult<f64> {
        compute_delay_hours(
            start,
            end,
            priority,
            &self.rules,
            &self.window,
            &self.holidays,
        )
    }
}

/// Elapsed hours from `start` to `end` under the rule for `priority`.
///
/// Rules with `duty_day_only` count only time inside the duty-day window on
/// weekdays that are not holidays; other rules return the raw difference,
/// negative when `end < start`.
pub fn compute_delay_hours(
    start: NaiveDateTime,
    end: NaiveDateTime,
    priority: &str,
    rules: &PriorityRules,
    window: &DutyDayWindow,
    holidays: &HolidaySet,
) -> AppResult<f64> {
    let rule = rules.get(priority)?;

    let elapsed = if rule.duty_day_only {
        duty_day_elapsed(start, end, window, holidays)
    } else {
        end - start
    };

    Ok(elapsed.num_seconds() as f64 / 3600.0)
}

/// Duty-day time between two timestamps. Partial days never go negative.
pub fn duty_day_elapsed(
    start: NaiveDateTime,
    end: NaiveDateTime,
    window: &DutyDayWindow,
    holidays: &HolidaySet,
) -> TimeDelta {
    let start_date = start.date();
    let end_date = end.date();
    let mut total = TimeDelta::zero();

    // First day
    if holidays.is_duty_day(start_date) && start.time() < window.end() {
        let adjusted_start = start.time().max(window.start());

        let first = if end_date == start_date && end.time() < window.end() {
            end.time() - adjusted_start
        } else {
            window.end() - adjusted_start
        };

        total += first.max(TimeDelta::zero());
    }

    // Full days strictly between the two dates
    let mut day = start_date.succ_opt();
    while let Some(d) = day {
        if d >= end_date {
            break;
        }
        if holidays.is_duty_day(d) {
            total += window.length();
        }
        day = d.succ_opt();
    }

    // Last day. Eligibility checks the weekday of the start date.
    if end_date > start_date
        && end.time() > window.start()
        && is_weekday(start_date)
        && !holidays.contains(end_date)
    {
        let last = end.time().min(window.end()) - window.start();
        total += last.max(TimeDelta::zero());
    }

    total
}
