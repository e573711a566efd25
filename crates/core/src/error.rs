//! Error model shared by every bounded context.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures raised while
/// constructing domain values (malformed input, unparsable identifiers).
/// Failures of external collaborators are reported as [`ServiceError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

/// Failure reported by an external collaborator (customer directory, tax
/// tables, fulfillment backend, ...).
///
/// The order workflow never inspects or rewrites these; it hands them back to
/// its caller as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The collaborator has no record for the requested key.
    #[error("not found: {0}")]
    NotFound(String),

    /// The collaborator could not be reached or is not accepting requests.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// The collaborator received the request and refused it.
    #[error("request rejected: {0}")]
    Rejected(String),
}

impl ServiceError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }
}
