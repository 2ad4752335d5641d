//! Response bodies with fixed messages

use serde::Serialize;

/// Plain-text body for the root route
pub const WELCOME: &str = "Welcome to the movie catalog API 🎬";

/// Confirmation body for operations that return a message instead of a
/// document
#[derive(Debug, Clone, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Delete confirmation
    pub fn deleted() -> Self {
        Self::new("movie deleted successfully")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deleted_message() {
        let body = serde_json::to_value(MessageBody::deleted()).unwrap();
        assert_eq!(body, serde_json::json!({"message": "movie deleted successfully"}));
    }
}
