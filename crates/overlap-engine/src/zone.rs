//! City → IANA time zone lookup.

use chrono_tz::Tz;

/// Zone used for any city missing from [`CITY_ZONES`].
pub const FALLBACK_ZONE: Tz = Tz::UTC;

/// Cities the scheduler knows about. Matching is exact and case-sensitive.
const CITY_ZONES: &[(&str, Tz)] = &[
    ("Los Angeles", Tz::America__Los_Angeles),
    ("New York", Tz::America__New_York),
    ("London", Tz::Europe__London),
    ("Paris", Tz::Europe__Paris),
    ("Samara", Tz::Europe__Samara),
    ("Prague", Tz::Europe__Prague),
    ("Tbilisi", Tz::Asia__Tbilisi),
];

/// Resolve a city name to its time zone.
///
/// Unknown cities are not an error: they resolve to [`FALLBACK_ZONE`].
pub fn zone_for_city(city: &str) -> Tz {
    match CITY_ZONES.iter().find(|(name, _)| *name == city) {
        Some((_, tz)) => *tz,
        None => {
            tracing::debug!(city, "unknown city, falling back to UTC");
            FALLBACK_ZONE
        }
    }
}
