//! # bmi_core - BMI Calculation Engine
//!
//! `bmi_core` is the computational heart of the BMI calculator: input
//! validation, the BMI formula, and WHO categorization. All inputs and
//! outputs are JSON-serializable, making the crate easy to drive from a
//! CLI, GUI, or API front end.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use bmi_core::{compute, BmiCategory};
//!
//! let result = compute(70.0, 175.0).unwrap();
//! assert_eq!(result.value, 22.86);
//! assert_eq!(result.category, BmiCategory::NormalWeight);
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`measurement`] - The weight/height input record and its validation
//! - [`bmi`] - The BMI formula and the composed compute chain
//! - [`category`] - WHO categories and thresholds
//! - [`form`] - Form session state for interactive front ends
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod bmi;
pub mod category;
pub mod errors;
pub mod form;
pub mod measurement;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use bmi::{calculate, compute, BmiResult};
pub use category::{categorize, BmiCategory};
pub use errors::{CalcError, CalcResult};
pub use form::BmiForm;
pub use measurement::{validate, Measurement, ValidationResult};
