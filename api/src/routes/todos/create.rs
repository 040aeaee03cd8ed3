use actix_web::{web, HttpResponse};
use validator::Validate;

use tt_core::repositories::{TodoRepository, UserRepository};
use tt_shared::types::ErrorResponse;

use crate::app::AppState;
use crate::dto::todo_dto::{CreateTodoRequest, TodoResponse};
use crate::handlers::handle_domain_error;
use crate::middleware::RequestIdentity;

/// Handler for POST /api/v1/todos
///
/// Creates a todo owned by the authenticated user.
///
/// # Request Body
///
/// ```json
/// {
///     "title": "buy milk",
///     "description": "2 liters"
/// }
/// ```
///
/// ## Success (201 Created): the created todo.
pub async fn create_todo<U, T>(
    state: web::Data<AppState<U, T>>,
    identity: RequestIdentity,
    request: web::Json<CreateTodoRequest>,
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

    let description = request.description.clone().unwrap_or_default();

    match state
        .todo_service
        .create(identity.user.id, &request.title, &description, false)
        .await
    {
        Ok(todo) => HttpResponse::Created().json(TodoResponse::from(todo)),
        Err(error) => handle_domain_error(error),
    }
}
