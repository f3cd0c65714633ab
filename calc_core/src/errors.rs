//! # Error Types
//!
//! Structured error types for calc_core. Every failure is local and
//! synchronous: the computation is deterministic, so an error means the
//! inputs or code parameters are physically inconsistent, never a transient
//! condition worth retrying.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_depth(d_mm: f64) -> CalcResult<()> {
//!     if d_mm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "depth_mm",
//!             d_mm.to_string(),
//!             "Effective depth must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_depth(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for design operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive geometry, strength, factor...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Steel grade or concrete class not found in the material tables
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// Bisection did not close its bracket within the iteration cap
    #[error("Neutral axis search did not converge after {iterations} iterations (bracket {bracket_mm} mm)")]
    NonConvergence { iterations: usize, bracket_mm: f64 },

    /// Resisted moment is not monotonic in the neutral-axis depth
    #[error("Resisted moment is not monotonic near x = {neutral_axis_mm} mm: {reason}")]
    NonMonotonicResistance { neutral_axis_mm: f64, reason: String },

    /// A denominator vanished or an intermediate became non-finite
    #[error("Degenerate geometry: {quantity} = {value}")]
    DegenerateGeometry { quantity: String, value: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a DegenerateGeometry error
    pub fn degenerate(quantity: impl Into<String>, value: f64) -> Self {
        CalcError::DegenerateGeometry {
            quantity: quantity.into(),
            value: value.to_string(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for numerical failures of the solver (as opposed to bad inputs)
    pub fn is_numerical(&self) -> bool {
        matches!(
            self,
            CalcError::NonConvergence { .. }
                | CalcError::NonMonotonicResistance { .. }
                | CalcError::DegenerateGeometry { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::NonConvergence { .. } => "NON_CONVERGENCE",
            CalcError::NonMonotonicResistance { .. } => "NON_MONOTONIC_RESISTANCE",
            CalcError::DegenerateGeometry { .. } => "DEGENERATE_GEOMETRY",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

/// Reject zero, negative and non-finite values for a named field.
pub(crate) fn ensure_positive(field: &str, value: f64, reason: &str) -> CalcResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("width_mm", "0", "Width must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::material_not_found("CA70").error_code(), "MATERIAL_NOT_FOUND");
        assert_eq!(CalcError::degenerate("xk", 0.0).error_code(), "DEGENERATE_GEOMETRY");
        let stalled = CalcError::NonConvergence { iterations: 200, bracket_mm: 0.5 };
        assert_eq!(stalled.error_code(), "NON_CONVERGENCE");
        assert!(stalled.is_numerical());
        assert!(!CalcError::invalid_input("b", "0", "x").is_numerical());
    }

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("d", 450.0, "positive").unwrap(), 450.0);
        assert!(ensure_positive("d", 0.0, "positive").is_err());
        assert!(ensure_positive("d", f64::NAN, "positive").is_err());
        assert!(ensure_positive("d", f64::INFINITY, "positive").is_err());
    }
}
