//! Error types for rule construction.

use thiserror::Error;

/// Errors that can occur while declaring rules.
///
/// Rejected values are never reported through this type; they surface as
/// [`Exclusion`](crate::Exclusion) values from membership evaluation.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RuleError {
    /// A pattern-backed rule was declared with a pattern that does not compile.
    #[error("invalid pattern for rule {id}: {source}")]
    InvalidPattern {
        /// Identifier of the rule being declared.
        id: String,
        /// Underlying regex compilation failure.
        source: regex::Error,
    },
}

/// Result type for rule construction.
pub type Result<T> = std::result::Result<T, RuleError>;
