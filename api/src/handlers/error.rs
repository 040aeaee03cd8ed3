use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;
use tt_core::errors::{AuthError, DomainError, TokenError, ValidationError};
use tt_shared::types::ErrorResponse;

/// Maps a domain error to the HTTP status and stable machine-readable
/// code clients switch on. The human-readable message is derived from
/// the error's `Display` impl, except for storage/internal failures
/// which stay opaque.
fn status_and_code(error: &DomainError) -> (StatusCode, &'static str) {
    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::UsernameTaken => (StatusCode::BAD_REQUEST, "username_taken"),
            AuthError::EmailTaken => (StatusCode::BAD_REQUEST, "email_taken"),
            AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "invalid_credentials"),
            AuthError::MissingAuthHeader => (StatusCode::UNAUTHORIZED, "missing_auth_header"),
            AuthError::MalformedAuthHeader => (StatusCode::UNAUTHORIZED, "malformed_auth_header"),
            AuthError::UnknownUser => (StatusCode::UNAUTHORIZED, "unknown_user"),
        },
        DomainError::Token(token_error) => match token_error {
            TokenError::Malformed => (StatusCode::UNAUTHORIZED, "malformed_token"),
            TokenError::UnsupportedAlgorithm => (StatusCode::UNAUTHORIZED, "unsupported_algorithm"),
            TokenError::InvalidSignature => (StatusCode::UNAUTHORIZED, "invalid_signature"),
            TokenError::Expired => (StatusCode::UNAUTHORIZED, "token_expired"),
            TokenError::GenerationFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        },
        DomainError::Validation(validation_error) => match validation_error {
            ValidationError::RequiredField { .. }
            | ValidationError::InvalidEmail
            | ValidationError::TooShort { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
        },
        DomainError::Conflict { .. } => (StatusCode::BAD_REQUEST, "conflict"),
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
        DomainError::Storage { .. } | DomainError::Internal { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
        }
    }
}

fn to_response(error: &DomainError) -> HttpResponse {
    let (status, code) = status_and_code(error);
    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        // Never leak internal detail to clients.
        log::error!("internal error: {error:?}");
        "An internal server error occurred".to_string()
    } else {
        error.to_string()
    };
    HttpResponse::build(status).json(ErrorResponse::new(code, &message))
}

/// Convert a domain error into the JSON error response handlers return.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    to_response(&error)
}

/// Wrapper that lets the access gate reject requests through actix's
/// `Error` channel while still producing the same JSON body as the
/// handlers do.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_and_code(&self.0).0
    }

    fn error_response(&self) -> HttpResponse {
        to_response(&self.0)
    }
}
