//! # Error Types
//!
//! Structured error types for conn_core. Every failure carries enough
//! context to tell the user which input or derived quantity is at fault,
//! and serializes cleanly to JSON for programmatic consumers.
//!
//! ## Example
//!
//! ```rust
//! use conn_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(weld_length_mm: f64) -> CalcResult<()> {
//!     if weld_length_mm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "weld_length_mm",
//!             weld_length_mm.to_string(),
//!             "Weld length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for conn_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for connection calculations.
///
/// None of these are recoverable inside the engine: calculations are
/// deterministic, so re-invoking with the same input yields the same error.
/// The caller owns user-facing messaging.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (negative load, zero bolt count, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Requested grade name is not in the fixed material catalog
    #[error("Unknown grade: {grade_name}")]
    UnknownGrade { grade_name: String },

    /// A derived area or section modulus is non-positive, leaving a
    /// utilization ratio undefined. Raised before any division happens.
    #[error("Invalid geometry: {quantity} = {value} - {reason}")]
    InvalidGeometry {
        quantity: String,
        value: f64,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownGrade error
    pub fn unknown_grade(grade_name: impl Into<String>) -> Self {
        CalcError::UnknownGrade {
            grade_name: grade_name.into(),
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(
        quantity: impl Into<String>,
        value: f64,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidGeometry {
            quantity: quantity.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownGrade { .. } => "UNKNOWN_GRADE",
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("tension_kn", "-5.0", "Load cannot be negative");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::unknown_grade("A999").error_code(),
            "UNKNOWN_GRADE"
        );
        assert_eq!(
            CalcError::invalid_geometry("net_area_mm2", -96.0, "Net area must be positive")
                .error_code(),
            "INVALID_GEOMETRY"
        );
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::unknown_grade("A999");
        assert_eq!(error.to_string(), "Unknown grade: A999");
    }
}
