//! Authentication response value object.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::PublicUser;

/// Returned after successful login: the signed bearer token and the
/// public-safe subset of the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Signed bearer token for subsequent requests
    pub token: String,

    /// Public projection of the user record (never the hash)
    pub user: PublicUser,
}

impl AuthResponse {
    pub fn new(token: String, user: PublicUser) -> Self {
        Self { token, user }
    }
}
