//! # Error Types
//!
//! Structured errors for the request-dispatch boundary. The calculators
//! themselves never fail: out-of-range or absent measurements resolve to
//! defined sentinel responses so a usable breakdown always reaches the
//! inspection report. Errors arise only when a caller hands over a request
//! that cannot be understood at all (malformed JSON, missing fields).
//!
//! ## Example
//!
//! ```rust
//! use en14960_core::errors::{CalcError, CalcResult};
//!
//! fn require_measurement(value: Option<f64>) -> CalcResult<f64> {
//!     value.ok_or_else(|| CalcError::missing_field("unit_length"))
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for en14960_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for request handling.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
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

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField { field: field.into() }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
