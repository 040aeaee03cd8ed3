//! Token service module for signed bearer credentials.
//!
//! Issues and verifies the compact, HMAC-signed, time-bound token that
//! carries a user identity between requests. Tokens are stateless:
//! nothing is stored server-side and there is no revocation before
//! expiry.

mod config;
mod service;


pub use config::TokenConfig;
pub use service::TokenService;
