//! Error types for the transition engine.

use thiserror::Error;

/// Result type for transition operations.
pub type Result<T> = std::result::Result<T, TransitionError>;

/// Errors raised by descriptor construction and the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// Malformed property descriptor or request construction.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// A request was built with no properties.
    #[error("a transition request needs at least one property")]
    MissingProperties,

    /// Internal bookkeeping no longer matches the element's native transition lists.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl TransitionError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArguments(message.into())
    }

    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation(message.into())
    }
}
