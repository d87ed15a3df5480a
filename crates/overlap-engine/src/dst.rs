//! Civil → absolute time conversion across DST transitions.
//!
//! A local wall-clock time in a zone maps to zero, one or two instants:
//!
//! - **Gap** (spring forward): the local time never happens. It is shifted
//!   later by the length of the gap, i.e. read with the offset in force
//!   before the transition (02:30 on a New York spring-forward day becomes
//!   03:30 EDT).
//! - **Overlap** (fall back): the local time happens twice. The earlier
//!   instant wins.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

/// Interpret `local` as wall-clock time in `tz` and return the instant.
///
/// Returns `None` when the instant falls outside chrono's representable range.
pub fn to_utc(tz: Tz, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earlier, _) => Some(earlier.with_timezone(&Utc)),
        LocalResult::None => shift_past_gap(tz, local),
    }
}

/// Apply the pre-transition offset to a local time that falls in a gap.
fn shift_past_gap(tz: Tz, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    // A day earlier is before the transition for every zone in the tz database.
    let probe = local.checked_sub_signed(Duration::days(1))?;
    let offset_seconds = tz.offset_from_utc_datetime(&probe).fix().local_minus_utc();
    let utc = local.checked_sub_signed(Duration::seconds(i64::from(offset_seconds)))?;
    Some(Utc.from_utc_datetime(&utc))
}
