use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use tt_core::repositories::{TodoRepository, UserRepository};

use crate::app::AppState;
use crate::handlers::handle_domain_error;
use crate::middleware::RequestIdentity;

/// Handler for DELETE /api/v1/todos/{id}
///
/// Deletes one of the authenticated user's todos.
pub async fn delete_todo<U, T>(
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
        .delete(identity.user.id, path.into_inner())
        .await
    {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "Todo deleted" })),
        Err(error) => handle_domain_error(error),
    }
}
