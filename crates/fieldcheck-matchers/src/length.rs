use fieldcheck_core::{Matcher, ValidationResult};

/// Code reported when the value is longer than the configured cap.
pub const CODE_TOO_LONG: &str = "string.e001";
/// Code reported when the value is shorter than the configured floor.
pub const CODE_TOO_SHORT: &str = "string.e002";

/// Validates that a string value does not exceed a maximum character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxLengthMatcher {
    max_length: usize,
}

impl MaxLengthMatcher {
    /// Creates a rule capping input at `max_length` characters.
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }
}

impl Matcher for MaxLengthMatcher {
    fn match_value(&self, value: Option<&str>) -> ValidationResult {
        let mut result = ValidationResult::new();
        if let Some(raw) = value {
            if raw.chars().count() > self.max_length {
                result.add_invalid_value_error(CODE_TOO_LONG, "The value exceeded maximum length.");
            }
        }
        result
    }
}

/// Validates that a string value reaches a minimum character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinLengthMatcher {
    min_length: usize,
}

impl MinLengthMatcher {
    /// Creates a rule requiring at least `min_length` characters.
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Matcher for MinLengthMatcher {
    fn match_value(&self, value: Option<&str>) -> ValidationResult {
        let mut result = ValidationResult::new();
        if let Some(raw) = value {
            if raw.chars().count() < self.min_length {
                result.add_invalid_value_error(
                    CODE_TOO_SHORT,
                    "The value did not reach minimum length.",
                );
            }
        }
        result
    }
}
