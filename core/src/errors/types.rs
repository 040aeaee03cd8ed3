//! Error types for authentication, token verification and validation.

use thiserror::Error;

/// Authentication and request-authorization errors.
///
/// `InvalidCredentials` deliberately covers both an unknown username and
/// a wrong password, so a login response never reveals whether a
/// username exists.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username already exists")]
    UsernameTaken,

    #[error("Email already exists")]
    EmailTaken,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Authorization header is required")]
    MissingAuthHeader,

    #[error("Authorization header format must be Bearer {{token}}")]
    MalformedAuthHeader,

    #[error("User not found")]
    UnknownUser,
}

/// Token verification errors, one per verification step.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Unsupported signing algorithm")]
    UnsupportedAlgorithm,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Input validation failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: &'static str },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Field too short: {field} (minimum {min} characters)")]
    TooShort { field: &'static str, min: usize },
}
