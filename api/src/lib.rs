//! HTTP API for TaskTrack.
//!
//! Exposes registration, login, and the protected todo/profile routes
//! behind the bearer-token access gate. The services themselves live in
//! `tt_core`; this crate only adapts them to HTTP.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
