//! HTTP middleware: the access gate and CORS configuration.

pub mod auth;
pub mod cors;

pub use auth::{AuthGate, RequestIdentity};
pub use cors::create_cors;
