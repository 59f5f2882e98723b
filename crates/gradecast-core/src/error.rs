//! Engine error types.
//!
//! Every failure the engine can report is a caller-input validation failure.
//! They are raised synchronously and never recovered internally, so callers
//! can match on the exact variant instead of inspecting messages.

use thiserror::Error;

/// Errors raised by the grade-point engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    /// A grade string outside the fixed letter enumeration.
    #[error("invalid grade token: '{0}'")]
    InvalidGradeToken(String),

    /// A course or roster entry with a non-positive credit value.
    #[error("invalid credits for {course}: {credits} (credits must be greater than zero)")]
    InvalidCredits { course: String, credits: i64 },

    /// A GPA-shaped input outside the 0.0-4.0 scale (or not finite).
    #[error("GPA {value} is outside the 0.0-4.0 scale")]
    GpaOutOfRange { value: f64 },

    /// A graduation requirement that cannot be satisfied by construction.
    #[error("invalid requirement: {0}")]
    InvalidRequirement(String),
}

impl GradeError {
    /// Returns `true` for errors caused by a single roster row, which a
    /// caller can surface next to that row.
    pub fn is_row_error(&self) -> bool {
        matches!(
            self,
            GradeError::InvalidGradeToken(_) | GradeError::InvalidCredits { .. }
        )
    }
}

/// Check that a GPA-shaped input lies on the 0.0-4.0 scale.
pub(crate) fn ensure_gpa_scale(value: f64) -> Result<f64, GradeError> {
    if value.is_finite() && (0.0..=4.0).contains(&value) {
        Ok(value)
    } else {
        Err(GradeError::GpaOutOfRange { value })
    }
}
