//! Database connection management and MySQL repository implementations.

pub mod connection;
pub mod mysql;
