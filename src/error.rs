//! Crate error type.

use thiserror::Error;

use crate::models::Weekday;
use crate::validation::ValidationError;

/// Errors returned by timetable generation and export.
#[derive(Debug, Error)]
pub enum TimetableError {
    /// No subject can legally fill a slot, even after repair.
    ///
    /// Unreachable for the fixed 10-subject / 3-quota / 5-day / 6-period
    /// grid; indicates a broken scheduling invariant.
    #[error("scheduling deadlock in section '{section}' on {day}, period {period}")]
    Deadlock {
        section: String,
        day: Weekday,
        period: u8,
    },

    /// The request failed validation.
    #[error("invalid timetable request: {}", join_messages(.0))]
    InvalidRequest(Vec<ValidationError>),

    /// JSON export or import failed.
    #[error("timetable document error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
