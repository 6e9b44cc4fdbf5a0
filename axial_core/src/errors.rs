//! # Error Types
//!
//! Structured error types for axial_core. Every failure in the engine is
//! column-local and traceable to a specific input, so each variant carries
//! enough context to report the problem without further lookups.
//!
//! ## Example
//!
//! ```rust
//! use axial_core::errors::{CalcError, CalcResult};
//!
//! fn validate_height(height_m: f64) -> CalcResult<()> {
//!     if height_m <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "height_m".to_string(),
//!             value: height_m.to_string(),
//!             reason: "Height must be greater than zero".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for axial_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for evaluation operations.
///
/// There are exactly two failure kinds in the engine: an input field that
/// is not a usable number, and a material key that is not in the supplied
/// registry. Both abort the evaluation of the column they occur in and
/// nothing else.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is not a valid number or failed the positivity check
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Referenced material key absent from the supplied registry
    #[error("Material '{key}' is not registered")]
    UnknownMaterial { key: String },
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

    /// Create an UnknownMaterial error
    pub fn unknown_material(key: impl Into<String>) -> Self {
        CalcError::UnknownMaterial { key: key.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownMaterial { .. } => "UNKNOWN_MATERIAL",
        }
    }
}
