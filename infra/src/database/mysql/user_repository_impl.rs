//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tt_core::domain::entities::user::User;
use tt_core::errors::DomainError;
use tt_core::repositories::UserRepository;

use super::map_sqlx_error;

/// MySQL implementation of UserRepository.
///
/// The `users` table carries unique indexes on `username` and `email`;
/// those constraints, not the application, are the authority on
/// uniqueness.
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity.
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(storage_err)?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Storage {
                message: format!("invalid uuid in users.id: {}", e),
            })?,
            username: row.try_get("username").map_err(storage_err)?,
            email: row.try_get("email").map_err(storage_err)?,
            password_hash: row.try_get("password_hash").map_err(storage_err)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(storage_err)?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(storage_err)?,
        })
    }

    async fn find_one(
        &self,
        query: &str,
        bind: &str,
    ) -> Result<Option<User>, DomainError> {
        let result = sqlx::query(query)
            .bind(bind)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}

const SELECT_COLUMNS: &str =
    "SELECT id, username, email, password_hash, created_at, updated_at FROM users";

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);
        self.find_one(&query, &id.to_string()).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE username = ? LIMIT 1", SELECT_COLUMNS);
        self.find_one(&query, username).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE email = ? LIMIT 1", SELECT_COLUMNS);
        self.find_one(&query, email).await
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(user)
    }
}

fn storage_err(e: sqlx::Error) -> DomainError {
    DomainError::Storage {
        message: format!("failed to read users row: {}", e),
    }
}
