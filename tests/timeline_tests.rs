use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rstatuslog::config::Config;
use rstatuslog::core::calculator::timeline::build_timeline;
use rstatuslog::core::calculator::{
    DelayPolicy, DelayResult, DutyDayWindow, HolidaySet, PriorityRules,
};
use rstatuslog::errors::AppError;
use rstatuslog::export::{MISMATCH_SENTINEL, StatusRowExport};
use rstatuslog::models::update::UpdateRecord;

fn at(day: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, day)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn policy() -> DelayPolicy {
    DelayPolicy::new(
        PriorityRules::new(Config::default().priorities),
        DutyDayWindow::new(
            NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
        )
        .unwrap(),
        HolidaySet::empty(),
    )
}

fn update(
    from: Option<&str>,
    to: &str,
    effective: NaiveDateTime,
    entry: NaiveDateTime,
) -> UpdateRecord {
    UpdateRecord {
        updater: "Bob Smith".to_string(),
        entry_time: entry,
        from_status: from.map(str::to_string),
        to_status: to.to_string(),
        status_note: None,
        effective_time: effective,
    }
}

fn chain() -> Vec<UpdateRecord> {
    vec![
        update(
            Some("Acknowledged"),
            "In Progress",
            at(3, 15, 0),
            at(4, 8, 15),
        ),
        update(None, "Opened", at(3, 8, 0), at(3, 8, 5)),
        update(
            Some("Opened"),
            "Acknowledged",
            at(3, 9, 30),
            at(3, 9, 40),
        ),
    ]
}

#[test]
fn test_timeline_sorted_by_effective_time() {
    let tl = build_timeline(&chain(), "Medium", &policy()).unwrap();

    let order: Vec<&str> = tl
        .entries
        .iter()
        .map(|e| e.update.to_status.as_str())
        .collect();
    assert_eq!(order, ["Opened", "Acknowledged", "In Progress"]);
    assert_eq!(tl.mismatches, 0);
}

#[test]
fn test_status_hours_measure_time_in_previous_status() {
    let tl = build_timeline(&chain(), "Medium", &policy()).unwrap();

    let hours: Vec<DelayResult> = tl.entries.iter().map(|e| e.status_hours).collect();
    assert_eq!(
        hours,
        [
            DelayResult::Hours(0.0),
            DelayResult::Hours(1.5),
            DelayResult::Hours(5.5)
        ]
    );
}

#[test]
fn test_update_delay_measures_logging_lag() {
    let tl = build_timeline(&chain(), "Medium", &policy()).unwrap();

    // Monday 15:00 effective, logged Tuesday 08:15: 1h + 1.25h of duty time
    assert_eq!(tl.entries[2].update_delay, DelayResult::Hours(2.25));
}

#[test]
fn test_wall_clock_priority_uses_raw_difference() {
    let tl = build_timeline(&chain(), "Critical", &policy()).unwrap();
    assert_eq!(tl.entries[2].update_delay, DelayResult::Hours(17.25));
    assert_eq!(tl.threshold_hours, 4.0);
}

#[test]
fn test_duplicate_updates_are_dropped() {
    let mut updates = chain();
    updates.push(updates[1].clone());

    let tl = build_timeline(&updates, "Medium", &policy()).unwrap();
    assert_eq!(tl.entries.len(), 3);
}

#[test]
fn test_broken_chain_is_reported_as_mismatch() {
    let mut updates = chain();
    updates[0].from_status = Some("Dispatched".to_string());

    let tl = build_timeline(&updates, "Medium", &policy()).unwrap();
    assert_eq!(tl.mismatches, 1);
    assert!(tl.entries[2].status_hours.is_mismatch());
    // the logging lag is still a number
    assert_eq!(tl.entries[2].update_delay, DelayResult::Hours(2.25));

    let rows = StatusRowExport::from_timeline(&tl);
    assert_eq!(rows[2].status_hours, MISMATCH_SENTINEL);
    assert_eq!(rows[2].update_delay, "2.25");
}

#[test]
fn test_breaches_compare_against_threshold() {
    let updates = vec![
        update(None, "Opened", at(3, 8, 0), at(3, 8, 0)),
        update(Some("Opened"), "Acknowledged", at(3, 9, 0), at(3, 9, 0)),
        update(Some("Acknowledged"), "In Progress", at(3, 15, 0), at(3, 15, 0)),
    ];

    // Critical: 4h threshold on wall clock; only the 6h wait breaches
    let tl = build_timeline(&updates, "Critical", &policy()).unwrap();
    let breached: Vec<&str> = tl
        .breaches()
        .map(|e| e.update.to_status.as_str())
        .collect();
    assert_eq!(breached, ["In Progress"]);
}

#[test]
fn test_unknown_priority_aborts_timeline() {
    let err = build_timeline(&chain(), "Whenever", &policy()).unwrap_err();
    assert!(matches!(err, AppError::UnknownPriority(_)));
}

#[test]
fn test_export_row_formatting() {
    let mut updates = chain();
    updates[2].status_note = Some("Assigned to field team".to_string());

    let tl = build_timeline(&updates, "Medium", &policy()).unwrap();
    let rows = StatusRowExport::from_timeline(&tl);

    assert_eq!(rows[0].from_status, "None");
    assert_eq!(rows[0].entry_time, "03/03/25 08:05 AM");
    assert_eq!(rows[0].update_delay, "0.08");
    assert_eq!(rows[1].status_note, "Assigned to field team");
    assert_eq!(rows[1].status_hours, "1.50");
    assert_eq!(rows[2].effective_time, "03/03/25 03:00 PM");
}
