//! MySQL implementation of the TodoRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tt_core::domain::entities::todo::Todo;
use tt_core::errors::DomainError;
use tt_core::repositories::TodoRepository;

use super::map_sqlx_error;

/// MySQL implementation of TodoRepository.
pub struct MySqlTodoRepository {
    pool: MySqlPool,
}

impl MySqlTodoRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Todo entity.
    fn row_to_todo(row: &sqlx::mysql::MySqlRow) -> Result<Todo, DomainError> {
        let id: String = row.try_get("id").map_err(storage_err)?;
        let user_id: String = row.try_get("user_id").map_err(storage_err)?;

        Ok(Todo {
            id: parse_uuid(&id)?,
            user_id: parse_uuid(&user_id)?,
            title: row.try_get("title").map_err(storage_err)?,
            description: row.try_get("description").map_err(storage_err)?,
            completed: row.try_get("completed").map_err(storage_err)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(storage_err)?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(storage_err)?,
        })
    }
}

const SELECT_COLUMNS: &str =
    "SELECT id, user_id, title, description, completed, created_at, updated_at FROM todos";

#[async_trait]
impl TodoRepository for MySqlTodoRepository {
    async fn find_by_owner(&self, user_id: Uuid) -> Result<Vec<Todo>, DomainError> {
        let query = format!("{} WHERE user_id = ? ORDER BY created_at ASC", SELECT_COLUMNS);

        let rows = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(Self::row_to_todo).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Todo>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_todo(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, todo: Todo) -> Result<Todo, DomainError> {
        let query = r#"
            INSERT INTO todos (id, user_id, title, description, completed, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(todo.id.to_string())
            .bind(todo.user_id.to_string())
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(todo.completed)
            .bind(todo.created_at)
            .bind(todo.updated_at)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(todo)
    }

    async fn update(&self, todo: Todo) -> Result<Todo, DomainError> {
        let query = r#"
            UPDATE todos
            SET title = ?, description = ?, completed = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(todo.completed)
            .bind(todo.updated_at)
            .bind(todo.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Todo".to_string(),
            });
        }

        Ok(todo)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}

fn parse_uuid(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|e| DomainError::Storage {
        message: format!("invalid uuid in todos row: {}", e),
    })
}

fn storage_err(e: sqlx::Error) -> DomainError {
    DomainError::Storage {
        message: format!("failed to read todos row: {}", e),
    }
}
