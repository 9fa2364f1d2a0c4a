use crate::core::calculator::{DelayPolicy, DutyDayWindow, HolidaySet, PriorityRule, PriorityRules};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::utils::date::parse_date;
use crate::utils::time::parse_required_time;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DutyDayConfig {
    pub start: String, // HH:MM
    pub end: String,   // HH:MM
}

impl Default for DutyDayConfig {
    fn default() -> Self {
        Self {
            start: "07:00".to_string(),
            end: "16:00".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub duty_day: DutyDayConfig,
    #[serde(default)]
    pub holidays: Vec<String>, // YYYY-MM-DD
    #[serde(default = "default_priorities")]
    pub priorities: BTreeMap<String, PriorityRule>,
    #[serde(default = "default_status_keywords")]
    pub status_keywords: Vec<String>,
    #[serde(default)]
    pub default_format: ExportFormat,
}

fn default_priorities() -> BTreeMap<String, PriorityRule> {
    [
        ("Critical", 4.0, false),
        ("High", 8.0, false),
        ("Medium", 24.0, true),
        ("Low", 72.0, true),
    ]
    .into_iter()
    .map(|(label, threshold_hours, duty_day_only)| {
        (
            label.to_string(),
            PriorityRule {
                threshold_hours,
                duty_day_only,
            },
        )
    })
    .collect()
}

fn default_status_keywords() -> Vec<String> {
    [
        "Change Request",
        "Suspended",
        "In Progress",
        "Acknowledged",
        "Dispatched",
        "Opened",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duty_day: DutyDayConfig::default(),
            holidays: Vec::new(),
            priorities: default_priorities(),
            status_keywords: default_status_keywords(),
            default_format: ExportFormat::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rstatuslog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rstatuslog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rstatuslog.conf")
    }

    /// Path in use: the `--config` override or the standard location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write the default configuration file. Refuses to overwrite unless `force`.
    pub fn init(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        fs::write(path, Self::default().to_yaml()?)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn duty_day_window(&self) -> AppResult<DutyDayWindow> {
        let start = parse_required_time(&self.duty_day.start)?;
        let end = parse_required_time(&self.duty_day.end)?;
        DutyDayWindow::new(start, end)
    }

    pub fn holiday_set(&self) -> AppResult<HolidaySet> {
        let dates = self
            .holidays
            .iter()
            .map(|h| parse_date(h).ok_or_else(|| AppError::InvalidDate(h.clone())))
            .collect::<AppResult<Vec<_>>>()?;
        Ok(HolidaySet::new(dates))
    }

    /// Validate the calendar settings and build the shared policy.
    pub fn delay_policy(&self) -> AppResult<DelayPolicy> {
        Ok(DelayPolicy::new(
            PriorityRules::new(self.priorities.clone()),
            self.duty_day_window()?,
            self.holiday_set()?,
        ))
    }

    /// Every problem found in the configuration; empty when it is usable.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if let Err(e) = self.duty_day_window() {
            problems.push(e.to_string());
        }

        for h in &self.holidays {
            if parse_date(h).is_none() {
                problems.push(format!("holiday '{}' is not a YYYY-MM-DD date", h));
            }
        }

        if self.priorities.is_empty() {
            problems.push("no priority rules defined".to_string());
        }

        for (label, rule) in &self.priorities {
            if rule.threshold_hours < 0.0 {
                problems.push(format!("priority '{}' has a negative threshold", label));
            }
        }

        if self.status_keywords.is_empty() {
            problems.push("no status keywords defined".to_string());
        }

        problems
    }
}
