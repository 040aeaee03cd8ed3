use actix_web::{web, HttpResponse};
use uuid::Uuid;

use tt_core::repositories::{TodoRepository, UserRepository};

use crate::app::AppState;
use crate::dto::todo_dto::{TodoResponse, UpdateTodoRequest};
use crate::handlers::handle_domain_error;
use crate::middleware::RequestIdentity;

/// Handler for PUT and PATCH /api/v1/todos/{id}
///
/// Updates one of the authenticated user's todos. Fields absent from
/// the body keep their stored values, so a full PUT body and a partial
/// PATCH body go through the same handler.
pub async fn update_todo<U, T>(
    state: web::Data<AppState<U, T>>,
    identity: RequestIdentity,
    path: web::Path<Uuid>,
    request: web::Json<UpdateTodoRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TodoRepository + 'static,
{
    match state
        .todo_service
        .update(
            identity.user.id,
            path.into_inner(),
            request.title.as_deref(),
            request.description.as_deref(),
            request.completed,
        )
        .await
    {
        Ok(todo) => HttpResponse::Ok().json(TodoResponse::from(todo)),
        Err(error) => handle_domain_error(error),
    }
}
