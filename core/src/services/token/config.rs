//! Configuration for the token service

use tt_shared::config::auth::{JwtConfig, DEFAULT_TOKEN_VALIDITY_HOURS};

/// Configuration for [`super::TokenService`].
///
/// There is intentionally no `Default`: a secret must always be
/// provided explicitly, and the service constructor rejects an empty
/// one.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Symmetric signing secret
    pub secret: String,

    /// Token validity window in hours
    pub validity_hours: i64,
}

impl TokenConfig {
    /// Create a configuration with the default 24-hour validity.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            validity_hours: DEFAULT_TOKEN_VALIDITY_HOURS,
        }
    }
}

impl From<JwtConfig> for TokenConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            secret: config.secret,
            validity_hours: config.validity_hours,
        }
    }
}
