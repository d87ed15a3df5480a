//! Tests for interval intersection and slot selection.

use chrono::{DateTime, Utc};
use overlap_engine::{intersect_all, select_slot, InPeriodPreference, WorkdayInterval};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn at(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn iv(start: &str, end: &str) -> WorkdayInterval {
    WorkdayInterval::new(at(start), at(end))
}

// ── intersect_all ───────────────────────────────────────────────────────────

#[test]
fn empty_input_has_no_window() {
    assert_eq!(intersect_all(&[]), None);
}

#[test]
fn single_interval_is_its_own_window() {
    let only = iv("2026-01-14T09:00:00Z", "2026-01-14T17:00:00Z");
    assert_eq!(intersect_all(&[only]), Some(only));
}

#[test]
fn window_is_latest_start_to_earliest_end() {
    let window = intersect_all(&[
        iv("2026-01-14T09:00:00Z", "2026-01-14T17:00:00Z"),
        iv("2026-01-14T14:00:00Z", "2026-01-14T22:00:00Z"),
        iv("2026-01-14T12:00:00Z", "2026-01-14T16:30:00Z"),
    ])
    .unwrap();

    assert_eq!(window.start, at("2026-01-14T14:00:00Z"));
    assert_eq!(window.end, at("2026-01-14T16:30:00Z"));
    assert_eq!(window.duration_minutes(), 150);
}

#[test]
fn adjacent_intervals_do_not_overlap() {
    let window = intersect_all(&[
        iv("2026-01-14T09:00:00Z", "2026-01-14T17:00:00Z"),
        iv("2026-01-14T17:00:00Z", "2026-01-15T01:00:00Z"),
    ]);
    assert_eq!(window, None);
}

#[test]
fn one_disjoint_interval_empties_the_window() {
    let window = intersect_all(&[
        iv("2026-01-14T09:00:00Z", "2026-01-14T17:00:00Z"),
        iv("2026-01-14T10:00:00Z", "2026-01-14T18:00:00Z"),
        iv("2026-01-14T18:00:00Z", "2026-01-15T02:00:00Z"),
    ]);
    assert_eq!(window, None);
}

#[test]
fn intersection_is_order_independent() {
    let a = iv("2026-01-14T05:00:00Z", "2026-01-14T13:00:00Z");
    let b = iv("2026-01-14T08:00:00Z", "2026-01-14T16:00:00Z");
    let c = iv("2026-01-14T09:00:00Z", "2026-01-14T17:00:00Z");

    let expected = intersect_all(&[a, b, c]);
    assert_eq!(intersect_all(&[c, b, a]), expected);
    assert_eq!(intersect_all(&[b, a, c]), expected);
    assert_eq!(expected, Some(iv("2026-01-14T09:00:00Z", "2026-01-14T13:00:00Z")));
}

// ── select_slot ─────────────────────────────────────────────────────────────

#[test]
fn no_window_means_no_slot() {
    assert_eq!(select_slot(None, 30, InPeriodPreference::Earliest), None);
    assert_eq!(select_slot(None, 30, InPeriodPreference::Latest), None);
}

#[test]
fn earliest_and_latest_bracket_the_window() {
    let window = iv("2026-01-14T14:00:00Z", "2026-01-14T17:00:00Z");

    assert_eq!(
        select_slot(Some(&window), 60, InPeriodPreference::Earliest),
        Some(at("2026-01-14T14:00:00Z"))
    );
    assert_eq!(
        select_slot(Some(&window), 60, InPeriodPreference::Latest),
        Some(at("2026-01-14T16:00:00Z"))
    );
}

#[test]
fn exact_fit_and_one_minute_over() {
    let window = iv("2026-01-14T14:00:00Z", "2026-01-14T17:00:00Z");

    assert_eq!(
        select_slot(Some(&window), 180, InPeriodPreference::Latest),
        Some(window.start)
    );
    assert_eq!(select_slot(Some(&window), 181, InPeriodPreference::Earliest), None);
    assert_eq!(select_slot(Some(&window), 181, InPeriodPreference::Latest), None);
}

#[test]
fn partial_minutes_are_truncated_when_measuring_the_window() {
    // 59.5 minutes of overlap is not enough for a one-hour meeting.
    let window = iv("2026-01-14T14:00:30Z", "2026-01-14T15:00:00Z");
    assert_eq!(window.duration_minutes(), 59);
    assert_eq!(select_slot(Some(&window), 60, InPeriodPreference::Earliest), None);
    assert_eq!(
        select_slot(Some(&window), 59, InPeriodPreference::Latest),
        Some(at("2026-01-14T14:01:00Z"))
    );
}
