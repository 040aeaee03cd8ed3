use actix_web::{web, HttpResponse};

use tt_core::repositories::{TodoRepository, UserRepository};

use crate::app::AppState;
use crate::dto::auth_dto::LoginRequest;
use crate::handlers::handle_domain_error;

/// Handler for POST /api/v1/login
///
/// Authenticates a user and issues a bearer token valid for 24 hours.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "alice",
///     "password": "hunter22"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "eyJhbGciOiJIUzI1NiIs...",
///     "user": { "id": "...", "username": "alice", "email": "alice@example.com" }
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: unknown username or wrong password, reported
///   identically as `invalid_credentials`
/// - 500 Internal Server Error: storage or token generation failure
pub async fn login<U, T>(
    state: web::Data<AppState<U, T>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TodoRepository + 'static,
{
    match state
        .auth_service
        .login(&request.username, &request.password)
        .await
    {
        Ok(auth_response) => HttpResponse::Ok().json(auth_response),
        Err(error) => handle_domain_error(error),
    }
}
