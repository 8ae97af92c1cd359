//! # Unit Types
//!
//! Type-safe wrappers for body measurement units. Simple newtype wrappers
//! rather than a full units library: the domain uses exactly two input
//! units, JSON serialization stays clean (just numbers), and there is no
//! runtime overhead.
//!
//! Metric units only. Weight is entered in kilograms and height in
//! centimeters; the BMI formula itself wants meters, so the one conversion
//! that matters here is `Centimeters -> Meters`.
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::units::{Centimeters, Meters};
//!
//! let height = Centimeters(175.0);
//! let height_m: Meters = height.into();
//! assert_eq!(height_m.0, 1.75);
//! ```

use serde::{Deserialize, Serialize};

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centimeters_to_meters() {
        let m: Meters = Centimeters(175.0).into();
        assert_eq!(m.0, 1.75);
    }

    #[test]
    fn test_meters_to_centimeters() {
        let cm: Centimeters = Meters(1.8).into();
        assert!((cm.0 - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_transparent_serialization() {
        let json = serde_json::to_string(&Kilograms(70.5)).unwrap();
        assert_eq!(json, "70.5");
        let back: Kilograms = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Kilograms(70.5));
    }
}
