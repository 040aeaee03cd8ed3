//! Token claims for the stateless bearer credential.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims structure for the signed bearer token payload.
///
/// The token is self-contained: subject and expiry are everything the
/// server needs, nothing is persisted, and there is no revocation before
/// expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,

    /// Issued at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `user_id` issued at `issued_at`, expiring
    /// after `validity`.
    pub fn new(user_id: Uuid, issued_at: DateTime<Utc>, validity: Duration) -> Self {
        Self {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + validity).timestamp(),
        }
    }

    /// Parses the subject claim back into a user id.
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}
