pub mod delay;
pub mod duty_day;
pub mod priority;
pub mod timeline;

pub use delay::{DelayPolicy, DelayResult, compute_delay_hours};
pub use duty_day::{DutyDayWindow, HolidaySet};
pub use priority::{PriorityRule, PriorityRules};
