//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors.
///
/// Specific failure families live in their own enums and bridge in via
/// `#[from]`; the umbrella adds the storage-facing variants. The HTTP
/// status mapping lives entirely in the API layer.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    /// A store uniqueness constraint fired on insert. Repositories
    /// report this distinctly from generic storage failures so the
    /// registration service can translate it into a domain conflict.
    #[error("Unique constraint violated on {field}")]
    Conflict { field: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
