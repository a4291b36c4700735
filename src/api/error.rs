//! API Error Types
//!
//! Errors raised while talking to the clinic backend.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Backend could not be reached
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// Transport-level failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("API error {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    /// Body did not match the expected shape
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Client could not be built from the given settings
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// Map a reqwest failure onto the right variant
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_connect() {
            ApiError::Unavailable(e.to_string())
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Request(e)
        }
    }

    /// The `message` the backend put in its error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text to show the admin: the backend's own words when it gave any
    pub fn user_message(&self) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| self.to_string())
    }

    /// HTTP status, when the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Invalid status".to_string()),
        };
        assert_eq!(err.user_message(), "Invalid status");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_user_message_falls_back_to_display() {
        let err = ApiError::Status {
            status: 502,
            message: None,
        };
        assert_eq!(err.user_message(), "API error 502: no message");

        let err = ApiError::Unavailable("connection refused".to_string());
        assert!(err.server_message().is_none());
        assert_eq!(err.user_message(), "Backend unavailable: connection refused");
    }
}
