//! # TaskTrack Shared
//!
//! Cross-cutting types used by every layer of the TaskTrack backend:
//! environment-driven configuration, the wire-level error envelope and
//! input validation helpers.

pub mod config;
pub mod types;
pub mod utils;
