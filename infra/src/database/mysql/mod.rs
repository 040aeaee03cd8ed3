//! MySQL repository implementations.

mod todo_repository_impl;
mod user_repository_impl;

pub use todo_repository_impl::MySqlTodoRepository;
pub use user_repository_impl::MySqlUserRepository;

use tt_core::errors::DomainError;

/// Translate a sqlx error into the domain error space.
///
/// Uniqueness violations (SQLSTATE 23000, MySQL error 1062) become
/// `DomainError::Conflict` naming the violated field, so the service
/// layer can distinguish them from generic storage failures. MySQL's
/// duplicate-entry message names the violated index, which we name
/// after the column.
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.code().as_deref() == Some("23000") {
            let message = db_err.message();
            let field = if message.contains("username") {
                "username"
            } else if message.contains("email") {
                "email"
            } else {
                "unknown"
            };
            return DomainError::Conflict {
                field: field.to_string(),
            };
        }
    }

    DomainError::Storage {
        message: format!("database query failed: {}", err),
    }
}
