//! # Form Session State
//!
//! State container behind an interactive BMI form: the raw text the user
//! typed, the last successful result, and the last error message. Front
//! ends (CLI, GUI) own one [`BmiForm`] and drive it with input changes
//! and submits; everything in here stays synchronous and in-memory.
//!
//! Error lifecycle: an error is terminal to the calculation attempt that
//! produced it and is cleared on the next input change or an explicit
//! [`BmiForm::reset`].
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::form::BmiForm;
//!
//! let mut form = BmiForm::new();
//! form.set_weight("70");
//! form.set_height("175");
//!
//! let result = form.submit().unwrap();
//! assert_eq!(result.value, 22.86);
//! assert_eq!(form.error(), None);
//! ```

use crate::bmi::{compute, BmiResult};
use crate::errors::CalcResult;

/// Mutable state for one BMI input form.
///
/// Inputs are kept as the raw strings the user typed; parsing happens at
/// submit time so partial input ("7", "17.") never errors early.
#[derive(Debug, Clone, Default)]
pub struct BmiForm {
    weight: String,
    height: String,
    result: Option<BmiResult>,
    error: Option<String>,
}

impl BmiForm {
    /// Create an empty form
    pub fn new() -> Self {
        BmiForm::default()
    }

    /// Raw weight input text
    pub fn weight(&self) -> &str {
        &self.weight
    }

    /// Raw height input text
    pub fn height(&self) -> &str {
        &self.height
    }

    /// Result of the last successful submit, if any
    pub fn result(&self) -> Option<&BmiResult> {
        self.result.as_ref()
    }

    /// User-facing message from the last failed submit, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the weight input. Clears any pending error.
    pub fn set_weight(&mut self, value: impl Into<String>) {
        self.weight = value.into();
        self.error = None;
    }

    /// Replace the height input. Clears any pending error.
    pub fn set_height(&mut self, value: impl Into<String>) {
        self.height = value.into();
        self.error = None;
    }

    /// Parse the inputs and run the validate-calculate-categorize chain.
    ///
    /// On success the result is stored and any previous error cleared; on
    /// failure the error message is stored and any previous result
    /// cleared, so the form never shows a stale result next to an error.
    /// Empty or unparseable input behaves as NaN and fails validation.
    pub fn submit(&mut self) -> CalcResult<BmiResult> {
        let weight = parse_input(&self.weight);
        let height = parse_input(&self.height);

        match compute(weight, height) {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
                Ok(result)
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Clear inputs, result, and error
    pub fn reset(&mut self) {
        *self = BmiForm::default();
    }
}

/// Parse a text field as f64, treating empty/garbage input as NaN so the
/// validator reports it rather than the parser.
fn parse_input(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::BmiCategory;

    #[test]
    fn test_successful_submit() {
        let mut form = BmiForm::new();
        form.set_weight("70");
        form.set_height("175");

        let result = form.submit().unwrap();
        assert_eq!(result.value, 22.86);
        assert_eq!(result.category, BmiCategory::NormalWeight);
        assert_eq!(form.result(), Some(&result));
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_empty_inputs_fail_validation() {
        let mut form = BmiForm::new();
        assert!(form.submit().is_err());
        assert_eq!(
            form.error(),
            Some("Please enter valid weight and height values")
        );
        assert_eq!(form.result(), None);
    }

    #[test]
    fn test_garbage_input() {
        let mut form = BmiForm::new();
        form.set_weight("abc");
        form.set_height("175");
        assert!(form.submit().is_err());
        assert_eq!(
            form.error(),
            Some("Please enter valid weight and height values")
        );
    }

    #[test]
    fn test_failed_submit_clears_previous_result() {
        let mut form = BmiForm::new();
        form.set_weight("70");
        form.set_height("175");
        form.submit().unwrap();
        assert!(form.result().is_some());

        form.set_weight("0");
        assert!(form.submit().is_err());
        assert_eq!(form.result(), None);
        assert_eq!(form.error(), Some("Weight must be greater than 0"));
    }

    #[test]
    fn test_input_change_clears_error() {
        let mut form = BmiForm::new();
        form.set_weight("0");
        form.set_height("175");
        assert!(form.submit().is_err());
        assert!(form.error().is_some());

        form.set_weight("70");
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_reset() {
        let mut form = BmiForm::new();
        form.set_weight("70");
        form.set_height("175");
        form.submit().unwrap();

        form.reset();
        assert_eq!(form.weight(), "");
        assert_eq!(form.height(), "");
        assert_eq!(form.result(), None);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_whitespace_is_tolerated() {
        let mut form = BmiForm::new();
        form.set_weight("  70 ");
        form.set_height(" 175");
        assert!(form.submit().is_ok());
    }
}
