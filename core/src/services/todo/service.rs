//! Todo CRUD scoped to the authenticated owner.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::todo::Todo;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::TodoRepository;

/// Service for managing a user's todo items.
pub struct TodoService<T: TodoRepository> {
    todo_repository: Arc<T>,
}

impl<T: TodoRepository> TodoService<T> {
    pub fn new(todo_repository: Arc<T>) -> Self {
        Self { todo_repository }
    }

    /// List all todos owned by `owner`, oldest first.
    pub async fn list(&self, owner: Uuid) -> DomainResult<Vec<Todo>> {
        self.todo_repository.find_by_owner(owner).await
    }

    /// Create a todo owned by `owner`.
    pub async fn create(
        &self,
        owner: Uuid,
        title: &str,
        description: &str,
        completed: bool,
    ) -> DomainResult<Todo> {
        if title.trim().is_empty() {
            return Err(ValidationError::RequiredField { field: "title" }.into());
        }

        let todo = Todo::new(owner, title.to_string(), description.to_string(), completed);
        let todo = self.todo_repository.create(todo).await?;
        debug!(todo_id = %todo.id, user_id = %owner, "todo created");
        Ok(todo)
    }

    /// Fetch a single todo owned by `owner`.
    pub async fn get(&self, owner: Uuid, id: Uuid) -> DomainResult<Todo> {
        self.find_owned(owner, id).await
    }

    /// Update a todo owned by `owner`.
    ///
    /// `None` fields keep their stored values, so partial and full
    /// update bodies share this path. The current record is read once;
    /// the fill-in happens against that single read.
    pub async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        title: Option<&str>,
        description: Option<&str>,
        completed: Option<bool>,
    ) -> DomainResult<Todo> {
        if let Some(title) = title {
            if title.trim().is_empty() {
                return Err(ValidationError::RequiredField { field: "title" }.into());
            }
        }

        let mut todo = self.find_owned(owner, id).await?;
        let title = title.map_or_else(|| todo.title.clone(), str::to_string);
        let description = description.map_or_else(|| todo.description.clone(), str::to_string);
        let completed = completed.unwrap_or(todo.completed);
        todo.apply_update(title, description, completed);
        self.todo_repository.update(todo).await
    }

    /// Delete a todo owned by `owner`.
    pub async fn delete(&self, owner: Uuid, id: Uuid) -> DomainResult<()> {
        let todo = self.find_owned(owner, id).await?;
        self.todo_repository.delete(todo.id).await?;
        debug!(todo_id = %id, user_id = %owner, "todo deleted");
        Ok(())
    }

    /// Resolve `id` to a todo owned by `owner`. A missing todo and a
    /// foreign one report the same `NotFound`: whether other users'
    /// todos exist is not revealed.
    async fn find_owned(&self, owner: Uuid, id: Uuid) -> DomainResult<Todo> {
        match self.todo_repository.find_by_id(id).await? {
            Some(todo) if todo.user_id == owner => Ok(todo),
            _ => Err(DomainError::NotFound {
                resource: "Todo".to_string(),
            }),
        }
    }
}
