use actix_web::{web, HttpResponse};

use tt_core::repositories::{TodoRepository, UserRepository};

use crate::app::AppState;
use crate::dto::todo_dto::TodoResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::RequestIdentity;

/// Handler for GET /api/v1/todos
///
/// Lists the authenticated user's todos, oldest first.
pub async fn list_todos<U, T>(
    state: web::Data<AppState<U, T>>,
    identity: RequestIdentity,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TodoRepository + 'static,
{
    match state.todo_service.list(identity.user.id).await {
        Ok(todos) => {
            let todos: Vec<TodoResponse> = todos.into_iter().map(TodoResponse::from).collect();
            HttpResponse::Ok().json(todos)
        }
        Err(error) => handle_domain_error(error),
    }
}
