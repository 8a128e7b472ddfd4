//! # Client Error Types
//!
//! Error types for talking to the marketplace API.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Client Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     API Response        │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Config         │  │  Http           │  │  Api { status, msg }    │ │
//! │  │                 │  │                 │  │  Unauthorized           │ │
//! │  │                 │  │                 │  │  NotFound / Parse       │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐                              │
//! │  │  Business Rule  │  │   Form Input    │  Raised before any request   │
//! │  │  Core           │  │  Validation     │  is sent.                    │
//! │  └─────────────────┘  └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failed API responses carry `{ "error": "..." }`. That text becomes the
//! error message; when it is missing the message is [`FALLBACK_MESSAGE`].

use foodhub_core::{CoreError, ValidationError};
use thiserror::Error;

/// Message used when a failed response has no `error` field.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Invalid client configuration: {0}")]
    Config(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Connection refused, timeout, TLS failure and friends.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // =========================================================================
    // API Response Errors
    // =========================================================================
    /// Non-success response with the server's message.
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    /// 401/403: no session or not allowed for this role.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Success response whose body did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    // =========================================================================
    // Local Rule Errors
    // =========================================================================
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ClientError {
    /// The message a person should see.
    ///
    /// For API failures this is exactly the server's `error` text.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. }
            | ClientError::Unauthorized(message)
            | ClientError::NotFound(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status for response errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Unauthorized(_) => Some(401),
            ClientError::NotFound(_) => Some(404),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::Config(format!("config file: {err}"))
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Config(format!("config file: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_server_text() {
        let err = ClientError::Api {
            status: 400,
            message: "Provider is closed".to_string(),
        };
        assert_eq!(err.user_message(), "Provider is closed");
        assert_eq!(err.to_string(), "Provider is closed (HTTP 400)");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_core_errors_pass_through() {
        let err: ClientError = CoreError::EmptyCart.into();
        assert_eq!(err.to_string(), "Cart is empty");
        assert_eq!(err.status(), None);
    }
}
