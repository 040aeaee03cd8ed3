use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredResponse {
    pub message: String,
}

impl RegisteredResponse {
    pub fn new() -> Self {
        Self {
            message: "Registration successful".to_string(),
        }
    }
}

impl Default for RegisteredResponse {
    fn default() -> Self {
        Self::new()
    }
}
