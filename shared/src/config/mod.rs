//! Configuration module with business-specific sub-modules
//!
//! Configuration is read once at process start from environment
//! variables (a `.env` file is honored by the binary crate):
//! - `auth` - token signing configuration
//! - `database` - connection pool configuration
//! - `server` - HTTP server bind configuration

pub mod auth;
pub mod database;
pub mod server;

use thiserror::Error;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Errors raised while loading configuration at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {var} must be set and non-empty")]
    MissingVar { var: &'static str },

    #[error("environment variable {var} has an invalid value")]
    InvalidVar { var: &'static str },
}
