//! Absolute workday intervals and their n-way intersection.
//!
//! Every interval is expressed in UTC, so intervals that came from different
//! zones can be compared directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A half-open span `[start, end)` on the UTC timeline.
///
/// Used both for a single developer's workday and for the common window
/// shared by the whole team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkdayInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl WorkdayInterval {
    /// Build an interval from its bounds. Callers keep `start <= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whole minutes between start and end.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Intersect all intervals into the single window they share.
///
/// The latest start and the earliest end are found in one pass. Returns
/// `None` when `intervals` is empty or the overlap is zero or negative;
/// intervals that merely touch (`a.end == b.start`) do not overlap.
///
/// The result does not depend on the order of `intervals`.
pub fn intersect_all(intervals: &[WorkdayInterval]) -> Option<WorkdayInterval> {
    let (first, rest) = intervals.split_first()?;

    let (start, end) = rest.iter().fold((first.start, first.end), |(start, end), iv| {
        (start.max(iv.start), end.min(iv.end))
    });

    if start < end {
        Some(WorkdayInterval { start, end })
    } else {
        None
    }
}
