//! Repository interfaces for data persistence.
//!
//! Traits only; concrete MySQL implementations live in the `tt_infra`
//! crate. Mock implementations are provided here for tests.

pub mod todo;
pub mod user;

pub use todo::TodoRepository;
pub use user::UserRepository;

pub use todo::MockTodoRepository;
pub use user::MockUserRepository;
