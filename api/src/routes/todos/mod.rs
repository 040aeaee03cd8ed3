//! Protected todo CRUD routes. All handlers run behind the access gate
//! and operate on the authenticated user's todos only.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use create::create_todo;
pub use delete::delete_todo;
pub use get::get_todo;
pub use list::list_todos;
pub use update::update_todo;
