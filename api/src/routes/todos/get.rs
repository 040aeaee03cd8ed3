use actix_web::{web, HttpResponse};
use uuid::Uuid;

use tt_core::repositories::{TodoRepository, UserRepository};

use crate::app::AppState;
use crate::dto::todo_dto::TodoResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::RequestIdentity;

/// Handler for GET /api/v1/todos/{id}
///
/// Fetches one of the authenticated user's todos. Another user's todo
/// answers 404 exactly like a nonexistent one.
pub async fn get_todo<U, T>(
    state: web::Data<AppState<U, T>>,
    identity: RequestIdentity,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TodoRepository + 'static,
{
    match state
        .todo_service
        .get(identity.user.id, path.into_inner())
        .await
    {
        Ok(todo) => HttpResponse::Ok().json(TodoResponse::from(todo)),
        Err(error) => handle_domain_error(error),
    }
}
