//! # Error Types
//!
//! Structured error types for bmi_core. Errors carry enough context
//! (field, offending value, reason) to be handled programmatically,
//! while [`CalcError::user_message`] provides the single user-facing
//! string that front ends display.
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::errors::{CalcError, CalcResult};
//!
//! fn check_weight(weight_kg: f64) -> CalcResult<()> {
//!     if weight_kg <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "weight",
//!             weight_kg.to_string(),
//!             "Weight must be greater than 0",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bmi_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for BMI calculation operations.
///
/// Every failure in this crate is a validation failure; there is no
/// recoverable/fatal distinction. Each variant keeps the field and value
/// that caused it so consumers can handle errors programmatically.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input did not parse as a finite number (empty field, garbage text, NaN)
    #[error("Not a number for '{field}'")]
    NotANumber { field: String },

    /// An input value is out of the acceptable range (zero, negative, too large)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// Create a NotANumber error
    pub fn not_a_number(field: impl Into<String>) -> Self {
        CalcError::NotANumber {
            field: field.into(),
        }
    }

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

    /// The single user-facing message for this error.
    ///
    /// This is what gets rendered in the form's error slot; the Display
    /// impl keeps the field/value context for logs and JSON consumers.
    pub fn user_message(&self) -> String {
        match self {
            CalcError::NotANumber { .. } => {
                "Please enter valid weight and height values".to_string()
            }
            CalcError::InvalidInput { reason, .. } => reason.clone(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::NotANumber { .. } => "NOT_A_NUMBER",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}
