//! Team roster types.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// A team member: where they work from and when their workday starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    /// City name, resolved to a time zone by [`crate::zone::zone_for_city`].
    pub city: String,
    /// Local wall-clock start of the workday, written as `"HH:MM"`.
    #[serde(with = "hhmm")]
    pub workday_start: NaiveTime,
}

impl Developer {
    /// Create a developer working from `city`, starting at `workday_start` local time.
    pub fn new(city: impl Into<String>, workday_start: NaiveTime) -> Self {
        Self {
            city: city.into(),
            workday_start,
        }
    }
}

/// Parse a local time of day in `HH:MM` or `HH:MM:SS` form.
///
/// # Errors
/// Returns `ScheduleError::InvalidTime` if neither form matches.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|e| ScheduleError::InvalidTime(format!("'{}': {}", s, e)))
}

/// Load a roster from a JSON array of developers.
///
/// ```
/// use overlap_engine::team::team_from_json;
///
/// let team = team_from_json(r#"[{"city":"London","workday_start":"09:00"}]"#).unwrap();
/// assert_eq!(team[0].city, "London");
/// ```
pub fn team_from_json(json: &str) -> Result<Vec<Developer>> {
    Ok(serde_json::from_str(json)?)
}

mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_time_of_day(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_time_forms() {
        let expected = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        assert_eq!(parse_time_of_day("09:30").unwrap(), expected);
        assert_eq!(parse_time_of_day("09:30:00").unwrap(), expected);
        assert_eq!(parse_time_of_day(" 09:30 ").unwrap(), expected);
    }

    #[test]
    fn rejects_garbage_time() {
        let err = parse_time_of_day("nine").unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidTime(_)));
        assert!(parse_time_of_day("25:00").is_err());
    }

    #[test]
    fn serializes_start_as_hours_and_minutes() {
        let dev = Developer::new("Paris", NaiveTime::from_hms_opt(8, 15, 0).unwrap());
        let json = serde_json::to_string(&dev).unwrap();
        assert_eq!(json, r#"{"city":"Paris","workday_start":"08:15"}"#);
    }
}
