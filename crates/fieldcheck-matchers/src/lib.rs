//! Built-in fieldcheck matcher rules.
//!
//! Every rule here implements [`fieldcheck_core::Matcher`]: it takes an
//! optional string value and returns a `ValidationResult` enumerating zero
//! or more violations. Misconfiguration (an unsupported parameter count, a
//! malformed pattern) is rejected at construction time with
//! [`MatcherConfigError`], never reported through the result.
//!
#![deny(missing_docs)]

/// Decimal number rule with digit-count and decimal-place limits.
pub mod decimal_number;
/// Construction-time configuration errors.
pub mod error;
/// String length rules.
pub mod length;
/// Regular-expression pattern rule.
pub mod pattern;

pub use decimal_number::{DecimalNumberMatcher, DigitLimits};
pub use error::MatcherConfigError;
pub use length::{MaxLengthMatcher, MinLengthMatcher};
pub use pattern::PatternMatcher;
