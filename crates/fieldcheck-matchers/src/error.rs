use thiserror::Error;

/// Errors raised while constructing a matcher from configuration.
#[derive(Debug, Error)]
pub enum MatcherConfigError {
    /// More parameters were supplied than the rule understands.
    #[error("too many parameters: expected at most {max}, got {got}")]
    TooManyParameters {
        /// Highest parameter count the rule accepts.
        max: usize,
        /// Number of parameters supplied.
        got: usize,
    },
    /// The supplied pattern is not a valid regular expression.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
