//! Error types for conditional rendering.

use branchwork_predicate::PredicateError;
use thiserror::Error;

/// Errors that can occur when configuring or rendering a [`Conditional`](crate::Conditional).
#[derive(Debug, Error)]
pub enum ConditionalError {
    /// A comparison directive could not be built.
    #[error(transparent)]
    Predicate(#[from] PredicateError),

    /// Condition + iteration mode needs a per-item render function.
    #[error("condition with iteration requires a per-item render function, got static children")]
    RenderFnRequired,

    /// Two emitted items produced the same key.
    #[error("duplicate item key '{key}' at index {index}")]
    DuplicateKey { key: String, index: usize },

    /// Presentation options could not be parsed.
    #[error("invalid presentation options: {0}")]
    InvalidPresentation(String),
}

impl From<serde_json::Error> for ConditionalError {
    fn from(err: serde_json::Error) -> Self {
        ConditionalError::InvalidPresentation(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConditionalError {
    fn from(err: serde_yaml::Error) -> Self {
        ConditionalError::InvalidPresentation(err.to_string())
    }
}

/// Result type for conditional rendering.
pub type Result<T> = std::result::Result<T, ConditionalError>;
