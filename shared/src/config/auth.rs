//! Authentication configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Default bearer token validity window in hours.
pub const DEFAULT_TOKEN_VALIDITY_HOURS: i64 = 24;

/// Token signing configuration.
///
/// The signing secret is process-wide and loaded exactly once at
/// startup. There is deliberately no default secret: a missing or empty
/// `JWT_SECRET` is a startup failure, never a silent fallback to an
/// insecure key.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric secret used for HMAC token signing
    pub secret: String,

    /// Token validity window in hours
    pub validity_hours: i64,
}

impl JwtConfig {
    /// Create a new configuration with the given secret and the default
    /// 24-hour validity window.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            validity_hours: DEFAULT_TOKEN_VALIDITY_HOURS,
        }
    }

    /// Load from environment variables.
    ///
    /// Reads `JWT_SECRET` (required, non-empty) and the optional
    /// `JWT_VALIDITY_HOURS` override.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET")
            .map_err(|_| ConfigError::MissingVar { var: "JWT_SECRET" })?;
        if secret.trim().is_empty() {
            return Err(ConfigError::MissingVar { var: "JWT_SECRET" });
        }

        let validity_hours = match std::env::var("JWT_VALIDITY_HOURS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidVar { var: "JWT_VALIDITY_HOURS" })?,
            Err(_) => DEFAULT_TOKEN_VALIDITY_HOURS,
        };

        Ok(Self { secret, validity_hours })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_validity() {
        let config = JwtConfig::new("unit-test-secret");
        assert_eq!(config.secret, "unit-test-secret");
        assert_eq!(config.validity_hours, DEFAULT_TOKEN_VALIDITY_HOURS);
    }
}
