//! # Error Types
//!
//! Structured error types for calc_core. Every failure in this crate is a
//! rejected input: the calculator performs no partial computation and the
//! caller can correct the field and resubmit.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_reps(reps: u32) -> CalcResult<()> {
//!     if !(1..=15).contains(&reps) {
//!         return Err(CalcError::out_of_range("reps", reps as f64, 1.0, 15.0));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_reps(20).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant names the offending field so a UI (or an LLM) can point the
/// user at exactly what to fix.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A required enum/categorical field was left unset
    #[error("Please select a value for '{field}'")]
    MissingSelection { field: String },

    /// A selection key has no matching table entry
    #[error("Unknown {field}: '{value}'")]
    UnknownSelection { field: String, value: String },

    /// A numeric field is outside its documented bounds
    ///
    /// An absent bound means the range is open on that side.
    #[error("'{field}' must be {} (got {value})", bounds_text(.min, .max))]
    OutOfRange {
        field: String,
        value: f64,
        min: Option<f64>,
        max: Option<f64>,
    },

    /// A cross-field rule does not hold (e.g. percentages not summing to 100)
    #[error("{rule}: {detail}")]
    InvariantViolation { rule: String, detail: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

/// Validation class an error falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Required selection unset or unrecognized
    MissingSelection,
    /// Numeric value out of bounds
    OutOfRange,
    /// Cross-field invariant broken
    InvariantViolation,
    /// Input could not be decoded at all
    Malformed,
}

impl CalcError {
    /// Create a MissingSelection error
    pub fn missing_selection(field: impl Into<String>) -> Self {
        CalcError::MissingSelection {
            field: field.into(),
        }
    }

    /// Create an UnknownSelection error
    pub fn unknown_selection(field: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::UnknownSelection {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an OutOfRange error for a closed range
    pub fn out_of_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        CalcError::OutOfRange {
            field: field.into(),
            value,
            min: Some(min),
            max: Some(max),
        }
    }

    /// Create an OutOfRange error for a value that must be at least `min`
    pub fn below_minimum(field: impl Into<String>, value: f64, min: f64) -> Self {
        CalcError::OutOfRange {
            field: field.into(),
            value,
            min: Some(min),
            max: None,
        }
    }

    /// Create an OutOfRange error for a value that must be strictly positive
    pub fn not_positive(field: impl Into<String>, value: f64) -> Self {
        CalcError::OutOfRange {
            field: field.into(),
            value,
            min: None,
            max: None,
        }
    }

    /// Create an InvariantViolation error
    pub fn invariant_violation(rule: impl Into<String>, detail: impl Into<String>) -> Self {
        CalcError::InvariantViolation {
            rule: rule.into(),
            detail: detail.into(),
        }
    }

    /// Name of the field this error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::MissingSelection { field }
            | CalcError::UnknownSelection { field, .. }
            | CalcError::OutOfRange { field, .. } => Some(field),
            CalcError::InvariantViolation { .. } | CalcError::SerializationError { .. } => None,
        }
    }

    /// Which validation class this error belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::MissingSelection { .. } | CalcError::UnknownSelection { .. } => {
                ErrorCategory::MissingSelection
            }
            CalcError::OutOfRange { .. } => ErrorCategory::OutOfRange,
            CalcError::InvariantViolation { .. } => ErrorCategory::InvariantViolation,
            CalcError::SerializationError { .. } => ErrorCategory::Malformed,
        }
    }

    /// Check if the caller can fix the input and resubmit
    ///
    /// All validation failures are recoverable; only undecodable input is not.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CalcError::SerializationError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::MissingSelection { .. } => "MISSING_SELECTION",
            CalcError::UnknownSelection { .. } => "UNKNOWN_SELECTION",
            CalcError::OutOfRange { .. } => "OUT_OF_RANGE",
            CalcError::InvariantViolation { .. } => "INVARIANT_VIOLATION",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

fn bounds_text(min: &Option<f64>, max: &Option<f64>) -> String {
    match (min, max) {
        (Some(lo), Some(hi)) => format!("between {} and {}", lo, hi),
        (Some(lo), None) => format!("at least {}", lo),
        (None, Some(hi)) => format!("at most {}", hi),
        (None, None) => "greater than zero".to_string(),
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::out_of_range("age", 12.0, 15.0, 80.0);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"OutOfRange\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_selection("gender").error_code(), "MISSING_SELECTION");
        assert_eq!(
            CalcError::invariant_violation("sum", "99").error_code(),
            "INVARIANT_VIOLATION"
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            CalcError::unknown_selection("food", "durian").category(),
            ErrorCategory::MissingSelection
        );
        assert_eq!(
            CalcError::out_of_range("reps", 20.0, 1.0, 15.0).category(),
            ErrorCategory::OutOfRange
        );
        assert!(CalcError::missing_selection("goal").is_recoverable());
    }

    #[test]
    fn test_messages_name_the_field() {
        let err = CalcError::below_minimum("weight_kg", 10.0, 30.0);
        assert_eq!(err.field(), Some("weight_kg"));
        assert_eq!(err.to_string(), "'weight_kg' must be at least 30 (got 10)");

        let err = CalcError::not_positive("amount_g", 0.0);
        assert_eq!(err.to_string(), "'amount_g' must be greater than zero (got 0)");
    }
}
