//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Allocation itself never fails; these are raised only at the edges
/// (identifier parsing, configuration, opt-in input validation).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Rejected input: a negative demand, a duplicate warehouse name, or an
    /// unknown fulfillment policy setting.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A warehouse holds a negative stock count.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A blank item id or warehouse name was parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
