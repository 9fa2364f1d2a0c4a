use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rstatuslog::core::calculator::{
    DutyDayWindow, HolidaySet, PriorityRule, PriorityRules, compute_delay_hours,
};
use rstatuslog::errors::AppError;

const DUTY: &str = "Medium";
const WALL: &str = "Critical";

fn rules() -> PriorityRules {
    [
        (
            DUTY.to_string(),
            PriorityRule {
                threshold_hours: 24.0,
                duty_day_only: true,
            },
        ),
        (
            WALL.to_string(),
            PriorityRule {
                threshold_hours: 4.0,
                duty_day_only: false,
            },
        ),
    ]
    .into_iter()
    .collect()
}

fn window() -> DutyDayWindow {
    DutyDayWindow::new(
        NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
    )
    .unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 2025-03-03 is a Monday.
fn at(day: u32, h: u32, min: u32) -> NaiveDateTime {
    date(2025, 3, day).and_hms_opt(h, min, 0).unwrap()
}

fn duty(start: NaiveDateTime, end: NaiveDateTime, holidays: &HolidaySet) -> f64 {
    compute_delay_hours(start, end, DUTY, &rules(), &window(), holidays).unwrap()
}

fn wall(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    compute_delay_hours(start, end, WALL, &rules(), &window(), &HolidaySet::empty()).unwrap()
}

#[test]
fn test_same_instant_is_zero_in_both_modes() {
    for t in [at(3, 6, 0), at(3, 10, 30), at(3, 16, 0), at(8, 12, 0)] {
        assert_eq!(duty(t, t, &HolidaySet::empty()), 0.0);
        assert_eq!(wall(t, t), 0.0);
    }
}

#[test]
fn test_wall_clock_mode_is_raw_difference() {
    assert_eq!(wall(at(3, 8, 0), at(5, 10, 30)), 50.5);
    assert_eq!(wall(at(8, 22, 0), at(9, 1, 0)), 3.0);
}

#[test]
fn test_wall_clock_mode_keeps_negative_values() {
    assert_eq!(wall(at(5, 10, 30), at(3, 8, 0)), -50.5);
}

#[test]
fn test_same_day_outside_window_is_zero() {
    let h = HolidaySet::empty();
    assert_eq!(duty(at(3, 17, 0), at(3, 18, 0), &h), 0.0);
    assert_eq!(duty(at(3, 5, 0), at(3, 6, 30), &h), 0.0);
}

#[test]
fn test_same_day_spanning_whole_window_is_full_day() {
    assert_eq!(duty(at(3, 6, 0), at(3, 17, 0), &HolidaySet::empty()), 9.0);
}

#[test]
fn test_same_day_inside_window() {
    let h = HolidaySet::empty();
    assert_eq!(duty(at(3, 9, 30), at(3, 11, 0), &h), 1.5);
    // start clamped up to window open
    assert_eq!(duty(at(3, 6, 0), at(3, 8, 15), &h), 1.25);
}

#[test]
fn test_next_day_counts_evening_and_morning() {
    // Monday 15:00 → Tuesday 08:00
    assert_eq!(duty(at(3, 15, 0), at(4, 8, 0), &HolidaySet::empty()), 2.0);
}

#[test]
fn test_next_day_before_window_open_adds_nothing() {
    // Monday 15:00 → Tuesday 06:30
    assert_eq!(duty(at(3, 15, 0), at(4, 6, 30), &HolidaySet::empty()), 1.0);
}

#[test]
fn test_intervening_weekdays_count_full_days() {
    // Monday 15:00 → Thursday 08:00: 1 + 9 + 9 + 1
    assert_eq!(duty(at(3, 15, 0), at(6, 8, 0), &HolidaySet::empty()), 20.0);
}

#[test]
fn test_weekend_days_add_nothing() {
    // Friday 15:00 → Monday 08:00
    assert_eq!(duty(at(7, 15, 0), at(10, 8, 0), &HolidaySet::empty()), 2.0);
    // Friday 15:00 → Tuesday 08:00: Monday is the only full day
    assert_eq!(duty(at(7, 15, 0), at(11, 8, 0), &HolidaySet::empty()), 11.0);
}

#[test]
fn test_holiday_start_date_zeroes_first_day() {
    let h = HolidaySet::new([date(2025, 3, 3)]);
    assert_eq!(duty(at(3, 10, 0), at(3, 12, 0), &h), 0.0);
    // last day still counts: the start date is a weekday
    assert_eq!(duty(at(3, 10, 0), at(4, 8, 0), &h), 1.0);
}

#[test]
fn test_holiday_between_and_at_end() {
    let tuesday_off = HolidaySet::new([date(2025, 3, 4)]);
    // Monday 15:00 → Wednesday 08:00 with Tuesday off
    assert_eq!(duty(at(3, 15, 0), at(5, 8, 0), &tuesday_off), 2.0);
    // Monday 15:00 → Tuesday 10:00 with Tuesday off
    assert_eq!(duty(at(3, 15, 0), at(4, 10, 0), &tuesday_off), 1.0);
}

#[test]
fn test_last_day_eligibility_uses_start_weekday() {
    // Saturday 10:00 → Monday 10:00: nothing counts because the start
    // date is not a weekday, although Monday is a duty day.
    assert_eq!(duty(at(8, 10, 0), at(10, 10, 0), &HolidaySet::empty()), 0.0);
}

#[test]
fn test_last_day_capped_at_window_end() {
    // Monday 15:00 → Tuesday 19:00
    assert_eq!(duty(at(3, 15, 0), at(4, 19, 0), &HolidaySet::empty()), 10.0);
}

#[test]
fn test_duty_mode_never_negative() {
    let h = HolidaySet::new([date(2025, 3, 5)]);
    let points = [
        at(3, 6, 0),
        at(3, 12, 0),
        at(4, 16, 30),
        at(5, 9, 0),
        at(8, 11, 0),
        at(10, 7, 0),
        at(12, 15, 59),
    ];

    for (i, s) in points.iter().enumerate() {
        for e in &points[i..] {
            assert!(duty(*s, *e, &h) >= 0.0, "{s} → {e}");
        }
    }
}

#[test]
fn test_duty_mode_reversed_input_does_not_fail() {
    let hours = duty(at(4, 10, 0), at(3, 10, 0), &HolidaySet::empty());
    assert!(hours >= 0.0);
}

#[test]
fn test_unknown_priority_is_config_error() {
    let err = compute_delay_hours(
        at(3, 8, 0),
        at(3, 9, 0),
        "Urgent",
        &rules(),
        &window(),
        &HolidaySet::empty(),
    )
    .unwrap_err();

    assert!(matches!(err, AppError::UnknownPriority(ref p) if p == "Urgent"));
}

#[test]
fn test_priority_label_whitespace_is_ignored() {
    let hours = compute_delay_hours(
        at(3, 8, 0),
        at(3, 9, 0),
        "  Medium ",
        &rules(),
        &window(),
        &HolidaySet::empty(),
    )
    .unwrap();
    assert_eq!(hours, 1.0);
}

#[test]
fn test_window_must_open_before_it_closes() {
    let err = DutyDayWindow::new(
        NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidDutyWindow(_)));

    let t = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    assert!(DutyDayWindow::new(t, t).is_err());
}
