use crate::core::calculator::delay::{DelayPolicy, DelayResult};
use crate::errors::AppResult;
use crate::models::update::UpdateRecord;

#[derive(Debug, Clone)]
pub struct TimelineEntry {
    pub update: UpdateRecord,
    /// Time spent in the from-status, i.e. since the previous change.
    pub status_hours: DelayResult,
    /// Time between the change taking effect and it being logged.
    pub update_delay: DelayResult,
}

#[derive(Debug, Default, Clone)]
pub struct Timeline {
    pub priority: String,
    pub threshold_hours: f64,
    pub entries: Vec<TimelineEntry>,
    pub mismatches: usize,
}

impl Timeline {
    /// Entries that stayed in their from-status longer than the priority threshold.
    pub fn breaches(&self) -> impl Iterator<Item = &TimelineEntry> {
        self.entries.iter().filter(|e| {
            e.status_hours
                .hours()
                .is_some_and(|h| h > self.threshold_hours)
        })
    }
}

pub fn build_timeline(
    updates: &[UpdateRecord],
    priority: &str,
    policy: &DelayPolicy,
) -> AppResult<Timeline> {
    let rule = policy.rule(priority)?;

    if updates.is_empty() {
        return Ok(Timeline {
            priority: priority.trim().to_string(),
            threshold_hours: rule.threshold_hours,
            ..Timeline::default()
        });
    }

    // -----------------------------
    // Drop duplicated rows
    // -----------------------------
    let mut unique: Vec<UpdateRecord> = Vec::with_capacity(updates.len());
    for u in updates {
        if !unique.contains(u) {
            unique.push(u.clone());
        }
    }

    // -----------------------------
    // Sort chronologically (stable: ties keep document order)
    // -----------------------------
    unique.sort_by_key(|u| u.effective_time);

    let mut entries = Vec::with_capacity(unique.len());
    let mut mismatches = 0;

    for (i, update) in unique.iter().enumerate() {
        let status_hours = match i.checked_sub(1).map(|p| &unique[p]) {
            None => DelayResult::Hours(0.0),
            Some(prev) if update.follows(prev) => DelayResult::Hours(policy.delay_hours(
                prev.effective_time,
                update.effective_time,
                priority,
            )?),
            Some(_) => {
                mismatches += 1;
                DelayResult::Mismatch
            }
        };

        let update_delay = DelayResult::Hours(policy.delay_hours(
            update.effective_time,
            update.entry_time,
            priority,
        )?);

        entries.push(TimelineEntry {
            update: update.clone(),
            status_hours,
            update_delay,
        });
    }

    Ok(Timeline {
        priority: priority.trim().to_string(),
        threshold_hours: rule.threshold_hours,
        entries,
        mismatches,
    })
}
