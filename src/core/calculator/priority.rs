use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Delay policy attached to a priority/severity label.
///
/// `threshold_hours` is only used for reporting; `duty_day_only` selects
/// the calculation mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityRule {
    pub threshold_hours: f64,
    pub duty_day_only: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriorityRules {
    rules: BTreeMap<String, PriorityRule>,
}

impl PriorityRules {
    pub fn new(rules: BTreeMap<String, PriorityRule>) -> Self {
        Self { rules }
    }

    /// Look up a label. Surrounding whitespace is ignored, case is not.
    pub fn get(&self, priority: &str) -> AppResult<&PriorityRule> {
        self.rules
            .get(priority.trim())
            .ok_or_else(|| AppError::UnknownPriority(priority.trim().to_string()))
    }
}

impl FromIterator<(String, PriorityRule)> for PriorityRules {
    fn from_iter<T: IntoIterator<Item = (String, PriorityRule)>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
