//! Error types for overlap-engine operations.
//!
//! Scheduling itself never fails: an impossible meeting is reported as `None`.
//! These errors only come from the edges that accept untrusted input.

use thiserror::Error;

/// Errors raised while validating or loading scheduling input.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid preference: {0}")]
    InvalidPreference(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
