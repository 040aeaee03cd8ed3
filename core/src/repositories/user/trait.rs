//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence.
///
/// Implementations own the concurrency control: `create` must be backed
/// by store-level uniqueness constraints on `username` and `email`, and
/// report a violation as [`DomainError::Conflict`] naming the offending
/// field. Pre-checks by callers are an optimization only.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given id
    /// * `Err(DomainError)` - Storage error
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user.
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Conflict { field })` - A uniqueness
    ///   constraint fired; `field` is `"username"` or `"email"`
    /// * `Err(DomainError)` - Any other storage error
    async fn create(&self, user: User) -> Result<User, DomainError>;
}
