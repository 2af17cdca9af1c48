//! Validation primitives shared across fieldcheck matcher rules.
//!
//! A matcher is a single validation rule over an optional string value. It
//! never raises: every outcome, valid or not, is expressed through the
//! [`ValidationResult`] it returns. This crate carries the pieces every rule
//! shares; the built-in rules themselves live in `fieldcheck-matchers`.
//!
#![deny(missing_docs)]

/// The matcher trait implemented by every validation rule.
pub mod matcher;
/// Validation results accumulated by matcher rules.
pub mod result;

pub use matcher::Matcher;
pub use result::{ErrorKind, ValidationError, ValidationResult};
