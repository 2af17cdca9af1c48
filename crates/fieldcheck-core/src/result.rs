use serde::{Deserialize, Serialize};

/// Category of a reported validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The value does not have the shape the rule expects (e.g. it is not
    /// parseable as the required type).
    InvalidType,
    /// The value parsed but violates a configured constraint.
    InvalidValue,
}

/// A single validation error reported by a matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Stable error code (e.g. `doubleNumber.e001`).
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Error category.
    pub kind: ErrorKind,
}

/// Ordered collection of validation errors produced by one match call.
///
/// A fresh result is created for every invocation; validity is derived from
/// the collection being empty, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates an empty (valid) result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an invalid-type error with a stable code and message.
    pub fn add_invalid_type_error(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.push(code, message, ErrorKind::InvalidType);
    }

    /// Appends an invalid-value error with a stable code and message.
    pub fn add_invalid_value_error(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.push(code, message, ErrorKind::InvalidValue);
    }

    /// True when no errors were recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Recorded errors, in insertion order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    fn push(&mut self, code: impl Into<String>, message: impl Into<String>, kind: ErrorKind) {
        self.errors.push(ValidationError {
            code: code.into(),
            message: message.into(),
            kind,
        });
    }
}
