use regex::Regex;

use fieldcheck_core::{Matcher, ValidationResult};

use crate::error::MatcherConfigError;

/// Code reported when the value does not match the required pattern.
pub const CODE_PATTERN_MISMATCH: &str = "string.e003";

/// Validates that a string value matches a regular expression.
///
/// The pattern is compiled once at construction; a malformed expression is a
/// configuration error, not a validation outcome.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    pattern: Regex,
}

impl PatternMatcher {
    /// Compiles `pattern` into a rule.
    pub fn new(pattern: &str) -> Result<Self, MatcherConfigError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl Matcher for PatternMatcher {
    fn match_value(&self, value: Option<&str>) -> ValidationResult {
        let mut result = ValidationResult::new();
        if let Some(raw) = value {
            if !self.pattern.is_match(raw) {
                result.add_invalid_value_error(
                    CODE_PATTERN_MISMATCH,
                    "The value does not match the required pattern.",
                );
            }
        }
        result
    }
}
