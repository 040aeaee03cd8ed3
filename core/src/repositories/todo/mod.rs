#[path = "trait.rs"]
mod trait_;

mod mock;

pub use mock::MockTodoRepository;
pub use trait_::TodoRepository;
