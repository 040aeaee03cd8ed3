//! Todo service module
//!
//! Owner-scoped CRUD over todo items. Every operation takes the
//! authenticated user's id; a todo belonging to someone else behaves
//! exactly like one that does not exist.

mod service;


pub use service::TodoService;
