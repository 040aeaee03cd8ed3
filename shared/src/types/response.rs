//! API response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error envelope returned by every failing endpoint.
///
/// `error` is a stable machine-readable code; `message` is
/// human-readable and carries no internal detail beyond the category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}
