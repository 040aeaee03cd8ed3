//! Business services containing domain logic and use cases.

pub mod auth;
pub mod password;
pub mod token;
pub mod todo;

// Re-export commonly used types
pub use auth::AuthService;
pub use todo::TodoService;
pub use token::{TokenConfig, TokenService};
