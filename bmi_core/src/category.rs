//! # BMI Categories
//!
//! WHO weight-status categories and the thresholds that separate them.
//!
//! Each band has an exclusive upper bound: a BMI of exactly 18.5 is
//! already "Normal weight", 25.0 is "Overweight", and 30.0 is "Obesity".
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::category::{categorize, BmiCategory};
//!
//! assert_eq!(categorize(22.86), BmiCategory::NormalWeight);
//! assert_eq!(categorize(30.0), BmiCategory::Obesity);
//! assert_eq!(BmiCategory::NormalWeight.display_name(), "Normal weight");
//! ```

use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of the underweight band
pub const UNDERWEIGHT_MAX: f64 = 18.5;

/// Upper bound (exclusive) of the normal-weight band
pub const NORMAL_MAX: f64 = 25.0;

/// Upper bound (exclusive) of the overweight band
pub const OVERWEIGHT_MAX: f64 = 30.0;

/// Weight-status category per WHO thresholds.
///
/// Serializes to the WHO display strings so JSON output reads
/// `"Normal weight"` rather than a variant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI < 18.5
    Underweight,
    /// 18.5 <= BMI < 25.0
    #[serde(rename = "Normal weight")]
    NormalWeight,
    /// 25.0 <= BMI < 30.0
    Overweight,
    /// BMI >= 30.0
    Obesity,
}

impl BmiCategory {
    /// All categories in ascending BMI order
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::NormalWeight,
        BmiCategory::Overweight,
        BmiCategory::Obesity,
    ];

    /// Human-readable WHO name
    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }

    /// BMI band covered by this category as (inclusive lower, exclusive upper).
    ///
    /// `None` means unbounded on that side.
    pub fn band(&self) -> (Option<f64>, Option<f64>) {
        match self {
            BmiCategory::Underweight => (None, Some(UNDERWEIGHT_MAX)),
            BmiCategory::NormalWeight => (Some(UNDERWEIGHT_MAX), Some(NORMAL_MAX)),
            BmiCategory::Overweight => (Some(NORMAL_MAX), Some(OVERWEIGHT_MAX)),
            BmiCategory::Obesity => (Some(OVERWEIGHT_MAX), None),
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Map a BMI value to its WHO category.
///
/// Pure threshold lookup; the value is expected to already be rounded
/// by [`calculate`](crate::bmi::calculate) but any finite value works.
pub fn categorize(bmi: f64) -> BmiCategory {
    if bmi < UNDERWEIGHT_MAX {
        BmiCategory::Underweight
    } else if bmi < NORMAL_MAX {
        BmiCategory::NormalWeight
    } else if bmi < OVERWEIGHT_MAX {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obesity
    }
}
