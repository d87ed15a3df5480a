//! The scheduling entry point.
//!
//! A [`SchedulingAssistant`] holds a fixed roster and a fixed "today". Each
//! call to [`SchedulingAssistant::schedule`] runs the whole pipeline from
//! scratch:
//!
//! 1. resolve the period preference to a target date,
//! 2. turn every developer's local workday into a UTC interval on that date,
//! 3. intersect the intervals into one common window,
//! 4. pick the earliest or latest start that fits the requested duration.
//!
//! Nothing is cached between calls and nothing is mutated, so one assistant
//! can be shared freely across threads.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::config::SchedulingConfig;
use crate::dst;
use crate::error::{Result, ScheduleError};
use crate::interval::{self, WorkdayInterval};
use crate::period::{self, MeetingTimingPreferences, PeriodPreference};
use crate::slot;
use crate::team::Developer;
use crate::zone;

/// Proposes meeting starts for a fixed roster relative to a fixed date.
#[derive(Debug, Clone)]
pub struct SchedulingAssistant {
    team: Vec<Developer>,
    today: NaiveDate,
    config: SchedulingConfig,
}

impl SchedulingAssistant {
    /// Create an assistant with the default 8-hour workday and Saturday as
    /// the last workday of the week. Any roster is accepted, including an
    /// empty one.
    pub fn new(team: Vec<Developer>, today: NaiveDate) -> Self {
        Self {
            team,
            today,
            config: SchedulingConfig::default(),
        }
    }

    /// Create an assistant with a custom [`SchedulingConfig`].
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidConfig` if `config` fails
    /// [`SchedulingConfig::validate`].
    pub fn with_config(
        team: Vec<Developer>,
        today: NaiveDate,
        config: SchedulingConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            team,
            today,
            config,
        })
    }

    /// The roster, in the order it was supplied.
    pub fn team(&self) -> &[Developer] {
        &self.team
    }

    /// The reference date periods are resolved against.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// The workday length and last workday in effect.
    pub fn config(&self) -> &SchedulingConfig {
        &self.config
    }

    /// Propose a meeting start (in UTC) for a meeting of `duration_minutes`.
    ///
    /// Returns `None` when the team is empty, the workdays do not overlap, the
    /// overlap is shorter than the meeting, or the target date or a workday
    /// lies outside chrono's representable range.
    ///
    /// ```
    /// use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
    /// use overlap_engine::{
    ///     Developer, InPeriodPreference, MeetingTimingPreferences, PeriodPreference,
    ///     SchedulingAssistant,
    /// };
    ///
    /// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    /// let team = vec![Developer::new("New York", nine), Developer::new("London", nine)];
    /// let today = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
    /// let assistant = SchedulingAssistant::new(team, today);
    ///
    /// let prefs = MeetingTimingPreferences::new(PeriodPreference::Today, InPeriodPreference::Latest);
    /// let start = assistant.schedule(60, prefs);
    /// assert_eq!(start, Some(Utc.with_ymd_and_hms(2026, 1, 14, 16, 0, 0).unwrap()));
    /// ```
    pub fn schedule(
        &self,
        duration_minutes: u32,
        preferences: MeetingTimingPreferences,
    ) -> Option<DateTime<Utc>> {
        let window = self.common_window(preferences.period);
        let start = slot::select_slot(window.as_ref(), duration_minutes, preferences.in_period);

        tracing::debug!(
            duration_minutes,
            period = %preferences.period,
            in_period = %preferences.in_period,
            start = ?start,
            "meeting slot selected"
        );

        start
    }

    /// Like [`schedule`](Self::schedule), but validates an untrusted duration first.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidDuration` if `duration_minutes` is not
    /// positive or exceeds the configured workday length.
    pub fn try_schedule(
        &self,
        duration_minutes: i64,
        preferences: MeetingTimingPreferences,
    ) -> Result<Option<DateTime<Utc>>> {
        if duration_minutes <= 0 {
            return Err(ScheduleError::InvalidDuration(format!(
                "meeting duration must be positive, got {} minutes",
                duration_minutes
            )));
        }
        if duration_minutes > i64::from(self.config.workday_minutes) {
            return Err(ScheduleError::InvalidDuration(format!(
                "meeting duration of {} minutes exceeds the {}-minute workday",
                duration_minutes, self.config.workday_minutes
            )));
        }
        let duration = u32::try_from(duration_minutes)
            .map_err(|e| ScheduleError::InvalidDuration(e.to_string()))?;
        Ok(self.schedule(duration, preferences))
    }

    /// The window every developer is working in on the date `period` resolves to.
    pub fn common_window(&self, period: PeriodPreference) -> Option<WorkdayInterval> {
        let Some(date) =
            period::resolve_target_date(self.today, period, self.config.last_workday)
        else {
            tracing::debug!(today = %self.today, %period, "target date out of range");
            return None;
        };
        let workdays = self.workdays(date)?;
        let window = interval::intersect_all(&workdays);

        tracing::debug!(
            %date,
            %period,
            team_size = workdays.len(),
            window = ?window,
            "common window"
        );

        window
    }

    /// Every developer's workday on `date` as a UTC interval, in roster order.
    ///
    /// The end is a fixed number of elapsed minutes after the start, so a
    /// workday spanning a DST change still lasts exactly
    /// [`SchedulingConfig::workday_minutes`].
    ///
    /// Returns `None` if any workday cannot be represented, which only happens
    /// at the extremes of the `NaiveDate` range.
    pub fn workdays(&self, date: NaiveDate) -> Option<Vec<WorkdayInterval>> {
        let length = Duration::minutes(i64::from(self.config.workday_minutes));

        self.team
            .iter()
            .map(|dev| {
                let tz = zone::zone_for_city(&dev.city);
                let start = dst::to_utc(tz, date.and_time(dev.workday_start))?;
                let end = start.checked_add_signed(length)?;
                tracing::trace!(
                    city = %dev.city,
                    zone = tz.name(),
                    %start,
                    %end,
                    "workday"
                );
                Some(WorkdayInterval::new(start, end))
            })
            .collect()
    }
}
