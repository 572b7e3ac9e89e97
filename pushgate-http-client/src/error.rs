//! HTTP client error types.

use thiserror::Error;

/// Result type for HTTP client operations.
pub type Result<T> = std::result::Result<T, HttpClientError>;

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// The underlying client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request building error.
    #[error("Failed to build request: {0}")]
    RequestBuild(String),

    /// Response error.
    #[error("Response error: {status} - {message}")]
    Response {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Underlying HTTP client error (DNS, connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure raised by a transport other than reqwest.
    #[error(transparent)]
    Transport(Box<dyn std::error::Error + Send + Sync>),
}

impl HttpClientError {
    /// Wrap an error from a custom transport.
    pub fn transport(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Transport(err.into())
    }

    /// Check if this is a timeout error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// Check if this is a connection error.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_connect())
    }

    /// Get the HTTP status code if this is a response error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_status_code() {
        let err = HttpClientError::Response {
            status: 502,
            message: "bad gateway".to_string(),
        };
        assert_eq!(err.status_code(), Some(502));
        assert!(!err.is_timeout());
        assert!(!err.is_connection());
    }

    #[test]
    fn test_error_display() {
        let err = HttpClientError::InvalidUrl("not a url".to_string());
        assert_eq!(err.to_string(), "Invalid URL: not a url");
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_transport_error_keeps_source_message() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
        let err = HttpClientError::transport(io);
        assert_eq!(err.to_string(), "connection reset");
        assert_eq!(err.status_code(), None);
        assert!(!err.is_connection());

        let err = HttpClientError::transport("socket closed");
        assert_eq!(err.to_string(), "socket closed");
    }
}
