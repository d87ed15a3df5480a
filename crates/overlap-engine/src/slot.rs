//! Pick a meeting start inside the common window.

use chrono::{DateTime, Duration, Utc};

use crate::interval::WorkdayInterval;
use crate::period::InPeriodPreference;

/// Choose a start instant for a meeting of `duration_minutes`.
///
/// Returns `None` if there is no window or the window is shorter than the
/// meeting. `Earliest` starts at the window start; `Latest` starts as late as
/// possible while still ending by the window end.
pub fn select_slot(
    window: Option<&WorkdayInterval>,
    duration_minutes: u32,
    preference: InPeriodPreference,
) -> Option<DateTime<Utc>> {
    let window = window?;
    let duration = i64::from(duration_minutes);

    if window.duration_minutes() < duration {
        return None;
    }

    match preference {
        InPeriodPreference::Earliest => Some(window.start),
        InPeriodPreference::Latest => Some(window.end - Duration::minutes(duration)),
    }
}
