//! Meeting timing preferences and target-date resolution.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Which calendar day to schedule on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodPreference {
    Today,
    Tomorrow,
    /// The last workday of the current week (Saturday by default).
    ThisWeek,
}

/// Where inside the common window the meeting should start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InPeriodPreference {
    Earliest,
    Latest,
}

/// The two coarse choices a meeting request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeetingTimingPreferences {
    pub period: PeriodPreference,
    pub in_period: InPeriodPreference,
}

impl MeetingTimingPreferences {
    /// Pair a period with an in-period preference.
    pub fn new(period: PeriodPreference, in_period: InPeriodPreference) -> Self {
        Self { period, in_period }
    }
}

impl FromStr for PeriodPreference {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "tomorrow" => Ok(Self::Tomorrow),
            "this_week" | "this-week" => Ok(Self::ThisWeek),
            other => Err(ScheduleError::InvalidPreference(format!(
                "unknown period '{}'",
                other
            ))),
        }
    }
}

impl FromStr for InPeriodPreference {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "earliest" => Ok(Self::Earliest),
            "latest" => Ok(Self::Latest),
            other => Err(ScheduleError::InvalidPreference(format!(
                "unknown in-period preference '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for PeriodPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
            Self::ThisWeek => "this_week",
        })
    }
}

impl fmt::Display for InPeriodPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Earliest => "earliest",
            Self::Latest => "latest",
        })
    }
}

/// Map a period preference to a concrete date.
///
/// `ThisWeek` picks `last_workday` within today's Monday-first week. When that
/// day has already passed, today is returned instead of moving into next week,
/// so the result is never before `today`.
///
/// Returns `None` when the target date is past [`NaiveDate::MAX`].
pub fn resolve_target_date(
    today: NaiveDate,
    period: PeriodPreference,
    last_workday: Weekday,
) -> Option<NaiveDate> {
    match period {
        PeriodPreference::Today => Some(today),
        PeriodPreference::Tomorrow => today.succ_opt(),
        PeriodPreference::ThisWeek => {
            let offset = i64::from(last_workday.num_days_from_monday())
                - i64::from(today.weekday().num_days_from_monday());
            if offset <= 0 {
                return Some(today);
            }
            today.checked_add_signed(Duration::days(offset))
        }
    }
}
