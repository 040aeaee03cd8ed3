//! Request/response data transfer objects.

pub mod auth_dto;
pub mod todo_dto;

pub use auth_dto::{LoginRequest, RegisterRequest, RegisteredResponse};
pub use todo_dto::{CreateTodoRequest, TodoResponse, UpdateTodoRequest};
