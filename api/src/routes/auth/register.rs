use actix_web::{web, HttpResponse};
use validator::Validate;

use tt_core::repositories::{TodoRepository, UserRepository};
use tt_shared::types::ErrorResponse;

use crate::app::AppState;
use crate::dto::auth_dto::{RegisterRequest, RegisteredResponse};
use crate::handlers::handle_domain_error;

/// Handler for POST /api/v1/register
///
/// Creates a new user account.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "alice",
///     "email": "alice@example.com",
///     "password": "hunter22"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// { "message": "Registration successful" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing fields, invalid email, short password, or
///   a username/email that is already taken
/// - 500 Internal Server Error: storage or hashing failure
pub async fn register<U, T>(
    state: web::Data<AppState<U, T>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TodoRepository + 'static,
{
    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "validation_error",
            "Invalid request data",
        ));
    }

    match state
        .auth_service
        .register(&request.username, &request.email, &request.password)
        .await
    {
        Ok(_) => HttpResponse::Created().json(RegisteredResponse::new()),
        Err(error) => handle_domain_error(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_rejects_short_password() {
        let request = RegisterRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_rejects_bad_email() {
        let request = RegisterRequest {
            username: "alice".to_string(),
            email: "not-an-email".to_string(),
            password: "hunter22".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_accepts_valid_input() {
        let request = RegisterRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "hunter22".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
