//! # overlap-engine
//!
//! Deterministic meeting-slot selection for teams spread across time zones.
//!
//! Given a roster of developers (a city and a local workday start each), a
//! fixed "today", a meeting length and a coarse preference, the engine finds
//! the window in which every developer is working and proposes the earliest
//! or latest start inside it. All arithmetic happens on the UTC timeline; the
//! caller decides what to do when no slot exists.
//!
//! ## Modules
//!
//! - [`assistant`] — `SchedulingAssistant`, the public entry point
//! - [`period`] — Period / in-period preferences and target-date resolution
//! - [`zone`] — City → IANA time zone table
//! - [`dst`] — Local → UTC conversion across DST gaps and overlaps
//! - [`interval`] — UTC workday intervals and n-way intersection
//! - [`slot`] — Earliest / latest start selection
//! - [`team`] — `Developer` and roster loading
//! - [`config`] — Workday length and last workday of the week
//! - [`error`] — Error types

pub mod assistant;
pub mod config;
pub mod dst;
pub mod error;
pub mod interval;
pub mod period;
pub mod slot;
pub mod team;
pub mod zone;

pub use assistant::SchedulingAssistant;
pub use config::SchedulingConfig;
pub use error::ScheduleError;
pub use interval::{intersect_all, WorkdayInterval};
pub use period::{InPeriodPreference, MeetingTimingPreferences, PeriodPreference};
pub use slot::select_slot;
pub use team::Developer;
