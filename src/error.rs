//! Application Errors
//!
//! One error type for the API client, storage and form validation.

use thiserror::Error;

/// Text shown when the server gave us nothing better to display
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again";

/// Common result type for frontend operations
pub type AppResult<T> = Result<T, AppError>;

/// Frontend errors
///
/// `Clone` so a single failed request can be handed to every query waiter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Request never reached the server or the connection dropped
    #[error("Network error: {0}")]
    Network(String),

    /// Credentials rejected or token refused (401/403, failed login)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Any other non-2xx response
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected schema
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Form input rejected before submission
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Browser storage unavailable or write refused
    #[error("Storage error: {0}")]
    Storage(String),

    /// The request driving a shared query was dropped
    #[error("Request cancelled")]
    Cancelled,
}

impl AppError {
    /// Message suitable for a toast
    pub fn user_message(&self) -> String {
        match self {
            AppError::Authentication(msg) | AppError::Validation(msg) => msg.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_keeps_server_text_for_auth() {
        let err = AppError::Authentication("Unable to log in.".to_string());
        assert_eq!(err.user_message(), "Unable to log in.");
    }

    #[test]
    fn test_user_message_is_generic_for_transport_errors() {
        assert_eq!(AppError::Network("dns".into()).user_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(
            AppError::Status { status: 500, message: "boom".into() }.user_message(),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(AppError::Cancelled.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_display() {
        let err = AppError::Status { status: 404, message: "Not found.".into() };
        assert_eq!(err.to_string(), "Request failed with status 404: Not found.");
    }
}
