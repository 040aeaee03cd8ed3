//! Authentication service module
//!
//! Credential issuance for the TaskTrack API:
//! - user registration with bcrypt password hashing
//! - login with signed bearer token issuance
//!
//! Credential verification (the per-request gate) lives in the API
//! layer and shares this crate's token service and repositories.

mod service;


pub use service::AuthService;
