//! Todo entity: a task item owned by a single user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A to-do item. Every todo belongs to exactly one user and is only
/// visible through that user's authenticated requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier for the todo
    pub id: Uuid,

    /// Owning user's id
    pub user_id: Uuid,

    /// Short title of the task
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Whether the task is done
    pub completed: bool,

    /// Timestamp when the todo was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the todo was last updated
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new Todo owned by `user_id`.
    pub fn new(user_id: Uuid, title: String, description: String, completed: bool) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            description,
            completed,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields, bumping `updated_at`.
    pub fn apply_update(&mut self, title: String, description: String, completed: bool) {
        self.title = title;
        self.description = description;
        self.completed = completed;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_defaults() {
        let owner = Uuid::new_v4();
        let todo = Todo::new(owner, "write tests".to_string(), String::new(), false);

        assert_eq!(todo.user_id, owner);
        assert_eq!(todo.title, "write tests");
        assert!(!todo.completed);
    }

    #[test]
    fn test_apply_update_replaces_fields() {
        let mut todo = Todo::new(Uuid::new_v4(), "a".to_string(), "b".to_string(), false);

        todo.apply_update("a2".to_string(), "b2".to_string(), true);
        assert_eq!(todo.title, "a2");
        assert_eq!(todo.description, "b2");
        assert!(todo.completed);
    }
}
