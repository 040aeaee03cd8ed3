pub mod todo;
pub mod token;
pub mod user;

pub use todo::Todo;
pub use token::Claims;
pub use user::{PublicUser, User};
