//! Error types for the predicate crate.

use thiserror::Error;

/// Errors that can occur when building comparison directives.
#[derive(Debug, Error)]
pub enum PredicateError {
    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// Result type for predicate operations.
pub type Result<T> = std::result::Result<T, PredicateError>;
