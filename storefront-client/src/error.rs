//! Client error types

use http::StatusCode;
use shared::ApiErrorBody;
use thiserror::Error;

/// Failure class of a client error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport or network failure
    Transport,
    /// Non-2xx response or undecodable body
    Api,
    /// Rejected client-side before any request was sent
    Validation,
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response not covered by a dedicated variant
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Client-side validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Map a non-2xx status and its raw body to an error
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.summary())
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    status.canonical_reason().unwrap_or("Unknown error").to_string()
                } else {
                    body.to_string()
                }
            });

        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            _ => Self::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Message suitable for a user notice (no variant prefix)
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. }
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::Validation(message) => message.clone(),
            Self::Unauthorized => "Please sign in again".to_string(),
            other => other.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_) | Self::Internal(_) => ErrorKind::Transport,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Api { .. }
            | Self::Unauthorized
            | Self::Forbidden(_)
            | Self::NotFound(_)
            | Self::InvalidResponse(_)
            | Self::Serialization(_) => ErrorKind::Api,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
