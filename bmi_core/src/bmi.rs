//! # BMI Calculation
//!
//! The formula itself plus the composed validate-calculate-categorize
//! chain. Follows the crate's calculation pattern:
//!
//! - [`Measurement`] - input parameters (JSON-serializable)
//! - [`BmiResult`] - calculation result (JSON-serializable)
//! - [`compute`] - pure function from input to result
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::bmi::{calculate, compute};
//! use bmi_core::category::BmiCategory;
//!
//! assert_eq!(calculate(70.0, 175.0), 22.86);
//!
//! let result = compute(70.0, 175.0).unwrap();
//! assert_eq!(result.value, 22.86);
//! assert_eq!(result.category, BmiCategory::NormalWeight);
//! ```

use serde::{Deserialize, Serialize};

use crate::category::{categorize, BmiCategory};
use crate::errors::CalcResult;
use crate::measurement::Measurement;
use crate::units::Meters;

/// Result of a BMI computation.
///
/// Invariant: `category` is always `categorize(value)`, and `value` is
/// always the rounded formula applied to the validated measurement.
///
/// ## JSON Example
///
/// ```json
/// {
///   "value": 22.86,
///   "category": "Normal weight"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI value, rounded to 2 decimal places
    pub value: f64,

    /// WHO category for `value`
    pub category: BmiCategory,
}

/// Round to 2 decimal places, half away from zero.
///
/// Matches round-half-up for the positive values this crate produces.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Calculate BMI from weight in kilograms and height in centimeters.
///
/// `bmi = weight / (height in meters)²`, rounded to 2 decimal places.
/// Inputs are not validated here; garbage in, garbage out. Use
/// [`compute`] for the checked chain.
pub fn calculate(weight_kg: f64, height_cm: f64) -> f64 {
    let measurement = Measurement::new(weight_kg, height_cm);
    let height_m: Meters = measurement.height.into();
    round2(measurement.weight.0 / (height_m.0 * height_m.0))
}

/// Validate, calculate, and categorize in one call.
///
/// This is the single synchronous chain the front ends use. It is pure
/// and deterministic: identical inputs always yield identical output.
///
/// # Returns
///
/// * `Ok(BmiResult)` - rounded value and its WHO category
/// * `Err(CalcError)` - if the inputs fail validation
pub fn compute(weight_kg: f64, height_cm: f64) -> CalcResult<BmiResult> {
    let measurement = Measurement::new(weight_kg, height_cm);
    measurement.validate()?;

    let value = calculate(weight_kg, height_cm);
    Ok(BmiResult {
        value,
        category: categorize(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(calculate(70.0, 175.0), 22.86);
        assert_eq!(calculate(50.0, 175.0), 16.33);
        assert_eq!(calculate(85.0, 175.0), 27.76);
        assert_eq!(calculate(100.0, 175.0), 32.65);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        // 70 / 1.75^2 = 22.857142... -> 22.86
        let bmi = calculate(70.0, 175.0);
        assert_eq!(bmi, (bmi * 100.0).round() / 100.0);
    }

    #[test]
    fn test_compute_categories() {
        assert_eq!(compute(50.0, 175.0).unwrap().category, BmiCategory::Underweight);
        assert_eq!(compute(70.0, 175.0).unwrap().category, BmiCategory::NormalWeight);
        assert_eq!(compute(85.0, 175.0).unwrap().category, BmiCategory::Overweight);
        assert_eq!(compute(100.0, 175.0).unwrap().category, BmiCategory::Obesity);
    }

    #[test]
    fn test_category_matches_value() {
        let result = compute(85.0, 175.0).unwrap();
        assert_eq!(result.category, categorize(result.value));
    }

    #[test]
    fn test_compute_rejects_invalid_input() {
        assert!(compute(0.0, 175.0).is_err());
        assert!(compute(501.0, 175.0).is_err());
        assert!(compute(70.0, 301.0).is_err());
        assert!(compute(f64::NAN, 175.0).is_err());
    }

    #[test]
    fn test_idempotence() {
        let first = compute(70.0, 175.0).unwrap();
        let second = compute(70.0, 175.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_serialization() {
        let result = compute(70.0, 175.0).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"value":22.86,"category":"Normal weight"}"#);
        let roundtrip: BmiResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
