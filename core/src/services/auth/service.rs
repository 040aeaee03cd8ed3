//! Registration and login.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::password;
use crate::services::token::TokenService;

/// Minimum accepted password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Authentication service handling registration and login.
pub struct AuthService<U: UserRepository> {
    user_repository: Arc<U>,
    token_service: Arc<TokenService>,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new authentication service.
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Register a new user.
    ///
    /// Validates inputs, pre-checks username and email availability for
    /// fast feedback, hashes the password and persists the record. The
    /// store's uniqueness constraint stays authoritative: a conflict
    /// surfacing from the insert itself (two registrations racing past
    /// the pre-check) is translated back into the same domain error the
    /// pre-check would have produced.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The newly created user
    /// * `Err(DomainError)` - Validation failure, `UsernameTaken`,
    ///   `EmailTaken`, or a storage error
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<User> {
        validate_registration(username, email, password)?;

        if self
            .user_repository
            .find_by_username(username)
            .await?
            .is_some()
        {
            return Err(AuthError::UsernameTaken.into());
        }
        if self.user_repository.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = password::hash_password(password)?;
        let user = User::new(username.to_string(), email.to_string(), password_hash);

        match self.user_repository.create(user).await {
            Ok(user) => {
                info!(user_id = %user.id, username = %user.username, "user registered");
                Ok(user)
            }
            Err(DomainError::Conflict { field }) if field == "username" => {
                Err(AuthError::UsernameTaken.into())
            }
            Err(DomainError::Conflict { field }) if field == "email" => {
                Err(AuthError::EmailTaken.into())
            }
            Err(e) => Err(e),
        }
    }

    /// Authenticate a user and issue a bearer token.
    ///
    /// An unknown username and a wrong password both fail with
    /// `InvalidCredentials`; the response never reveals which check
    /// failed.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = match self.user_repository.find_by_username(username).await? {
            Some(user) => user,
            None => return Err(AuthError::InvalidCredentials.into()),
        };

        if !password::verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.issue(user.id)?;
        info!(user_id = %user.id, "user logged in");

        Ok(AuthResponse::new(token, user.to_public()))
    }
}

fn validate_registration(username: &str, email: &str, password: &str) -> DomainResult<()> {
    if username.trim().is_empty() {
        return Err(ValidationError::RequiredField { field: "username" }.into());
    }
    if email.trim().is_empty() {
        return Err(ValidationError::RequiredField { field: "email" }.into());
    }
    if !tt_shared::utils::is_valid_email(email) {
        return Err(ValidationError::InvalidEmail.into());
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::TooShort {
            field: "password",
            min: MIN_PASSWORD_LENGTH,
        }
        .into());
    }
    Ok(())
}
