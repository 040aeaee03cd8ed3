//! # TaskTrack Infrastructure
//!
//! Concrete MySQL implementations of the `tt_core` repository traits,
//! plus connection-pool bootstrap.

pub mod database;

pub use database::connection::create_pool;
pub use database::mysql::{MySqlTodoRepository, MySqlUserRepository};
