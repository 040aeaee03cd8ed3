//! Todo repository trait defining the interface for todo persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::todo::Todo;
use crate::errors::DomainError;

/// Repository trait for Todo entity persistence.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All todos owned by `user_id`, oldest first.
    async fn find_by_owner(&self, user_id: Uuid) -> Result<Vec<Todo>, DomainError>;

    /// Find a todo by its id regardless of owner; ownership checks are
    /// the service's responsibility.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Todo>, DomainError>;

    /// Persist a new todo.
    async fn create(&self, todo: Todo) -> Result<Todo, DomainError>;

    /// Update an existing todo in place.
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No todo with this id
    async fn update(&self, todo: Todo) -> Result<Todo, DomainError>;

    /// Delete a todo.
    ///
    /// # Returns
    /// * `Ok(true)` - Todo was deleted
    /// * `Ok(false)` - Todo not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
