//! # Measurement and Validation
//!
//! A [`Measurement`] is a transient value record: two numbers entered by
//! the user, recreated per calculation request and never persisted.
//! Validation happens in a fixed priority order so the user always sees
//! the most fundamental problem first (unparseable input before range
//! complaints, zero/negative before "too high").
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::measurement::{validate, Measurement};
//!
//! let m = Measurement::new(70.0, 175.0);
//! assert!(m.validate().is_ok());
//!
//! let result = validate(0.0, 175.0);
//! assert!(!result.is_valid);
//! assert_eq!(result.error_message.as_deref(), Some("Weight must be greater than 0"));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Centimeters, Kilograms};

/// Heaviest weight the form accepts, in kilograms
pub const MAX_WEIGHT_KG: f64 = 500.0;

/// Tallest height the form accepts, in centimeters
pub const MAX_HEIGHT_CM: f64 = 300.0;

/// A single weight/height reading.
///
/// ## JSON Example
///
/// ```json
/// {
///   "weight": 70.0,
///   "height": 175.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Body weight in kilograms
    pub weight: Kilograms,

    /// Body height in centimeters
    pub height: Centimeters,
}

impl Measurement {
    /// Create a measurement from raw kilogram/centimeter values.
    ///
    /// The values are not checked here; call [`Measurement::validate`]
    /// before calculating with them.
    pub fn new(weight_kg: f64, height_cm: f64) -> Self {
        Measurement {
            weight: Kilograms(weight_kg),
            height: Centimeters(height_cm),
        }
    }

    /// Validate this measurement against the acceptable input ranges.
    ///
    /// Checks run in priority order; the first failure wins:
    ///
    /// 1. either value is NaN (unparseable or empty input upstream)
    /// 2. weight <= 0
    /// 3. height <= 0
    /// 4. weight > 500 kg
    /// 5. height > 300 cm
    pub fn validate(&self) -> CalcResult<()> {
        let weight = self.weight.0;
        let height = self.height.0;

        if weight.is_nan() {
            return Err(CalcError::not_a_number("weight"));
        }
        if height.is_nan() {
            return Err(CalcError::not_a_number("height"));
        }
        if weight <= 0.0 {
            return Err(CalcError::invalid_input(
                "weight",
                weight.to_string(),
                "Weight must be greater than 0",
            ));
        }
        if height <= 0.0 {
            return Err(CalcError::invalid_input(
                "height",
                height.to_string(),
                "Height must be greater than 0",
            ));
        }
        if weight > MAX_WEIGHT_KG {
            return Err(CalcError::invalid_input(
                "weight",
                weight.to_string(),
                "Weight seems too high, please check your input",
            ));
        }
        if height > MAX_HEIGHT_CM {
            return Err(CalcError::invalid_input(
                "height",
                height.to_string(),
                "Height seems too high, please check your input",
            ));
        }
        Ok(())
    }
}

/// Flat pass/fail view of a validation check.
///
/// This is the shape front ends bind to: a boolean plus the one
/// user-facing message, `None` when the input passed.
///
/// ## JSON Example
///
/// ```json
/// {
///   "is_valid": false,
///   "error_message": "Weight must be greater than 0"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the inputs are acceptable for calculation
    pub is_valid: bool,

    /// User-facing reason for the failure, `None` on pass
    pub error_message: Option<String>,
}

impl ValidationResult {
    /// A passing result
    pub fn pass() -> Self {
        ValidationResult {
            is_valid: true,
            error_message: None,
        }
    }

    /// A failing result carrying the error's user-facing message
    pub fn fail(error: &CalcError) -> Self {
        ValidationResult {
            is_valid: false,
            error_message: Some(error.user_message()),
        }
    }
}

impl From<CalcResult<()>> for ValidationResult {
    fn from(result: CalcResult<()>) -> Self {
        match result {
            Ok(()) => ValidationResult::pass(),
            Err(e) => ValidationResult::fail(&e),
        }
    }
}

/// Validate raw weight/height floats (NaN allowed, meaning "unparseable").
///
/// Convenience wrapper over [`Measurement::validate`] returning the flat
/// [`ValidationResult`] shape.
pub fn validate(weight_kg: f64, height_cm: f64) -> ValidationResult {
    Measurement::new(weight_kg, height_cm).validate().into()
}
