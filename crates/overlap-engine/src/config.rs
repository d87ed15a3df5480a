//! Tunable scheduling constants.
//!
//! [`SchedulingConfig::default`] reproduces the standard behavior: an 8-hour
//! workday and Saturday as the last workday of the week.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Minutes in a day; the upper bound for a workday.
const MINUTES_PER_DAY: u32 = 24 * 60;

/// Scheduling constants shared by every developer on the roster.
///
/// Built directly as a struct it is unchecked; [`SchedulingAssistant::with_config`]
/// and [`SchedulingConfig::from_json`] both run [`validate`](Self::validate).
///
/// [`SchedulingAssistant::with_config`]: crate::SchedulingAssistant::with_config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingConfig {
    /// Length of every developer's workday, as elapsed (absolute) minutes.
    pub workday_minutes: u32,
    /// The weekday `ThisWeek` resolves to.
    pub last_workday: Weekday,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            workday_minutes: 8 * 60,
            last_workday: Weekday::Sat,
        }
    }
}

impl SchedulingConfig {
    /// Parse a config from JSON. Missing fields take their default values.
    ///
    /// # Errors
    /// Returns `ScheduleError::Json` for malformed input and
    /// `ScheduleError::InvalidConfig` if the result fails [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SchedulingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the workday length lies in `1..=1440` minutes.
    pub fn validate(&self) -> Result<()> {
        if self.workday_minutes == 0 || self.workday_minutes > MINUTES_PER_DAY {
            return Err(ScheduleError::InvalidConfig(format!(
                "workday_minutes must be between 1 and {}, got {}",
                MINUTES_PER_DAY, self.workday_minutes
            )));
        }
        Ok(())
    }
}
