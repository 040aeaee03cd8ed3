//! Mock implementation of TodoRepository for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::todo::Todo;
use crate::errors::DomainError;

use super::trait_::TodoRepository;

/// In-memory todo repository for tests.
pub struct MockTodoRepository {
    todos: Arc<RwLock<HashMap<Uuid, Todo>>>,
}

impl MockTodoRepository {
    pub fn new() -> Self {
        Self {
            todos: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn find_by_owner(&self, user_id: Uuid) -> Result<Vec<Todo>, DomainError> {
        let todos = self.todos.read().await;
        let mut owned: Vec<Todo> = todos
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|t| t.created_at);
        Ok(owned)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Todo>, DomainError> {
        let todos = self.todos.read().await;
        Ok(todos.get(&id).cloned())
    }

    async fn create(&self, todo: Todo) -> Result<Todo, DomainError> {
        let mut todos = self.todos.write().await;
        todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, todo: Todo) -> Result<Todo, DomainError> {
        let mut todos = self.todos.write().await;
        if !todos.contains_key(&todo.id) {
            return Err(DomainError::NotFound {
                resource: "Todo".to_string(),
            });
        }
        todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut todos = self.todos.write().await;
        Ok(todos.remove(&id).is_some())
    }
}
