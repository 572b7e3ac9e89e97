//! Push error types.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::{GatewayEnvelope, PushToken};

/// Result type for push operations.
pub type Result<T> = std::result::Result<T, PushError>;

/// Errors returned by a publish call or by token construction.
#[derive(Debug, Error)]
pub enum PushError {
    /// Token does not carry the expected prefix.
    #[error("Token should start with ExponentPushToken, got `{0}`")]
    MalformedToken(String),

    /// The batch was rejected before anything was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The batch could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Network-level failure, as reported by the transport.
    #[error("Transport error: {0}")]
    Transport(#[from] pushgate_http_client::HttpClientError),

    /// The gateway answered with a non-2xx status.
    #[error(transparent)]
    GatewayStatus(#[from] GatewayStatusError),

    /// The body is not an envelope, or signals neither success nor failure.
    #[error("Invalid server response: {0}")]
    MalformedResponse(String),

    /// The gateway rejected the request as a whole.
    #[error("Gateway rejected the request: {}", summarize(.errors))]
    GatewayRequest {
        /// Raw error objects from the `errors` array.
        errors: Vec<Map<String, Value>>,
        /// The full parsed envelope.
        envelope: Box<GatewayEnvelope>,
    },

    /// Receipt count differs from the number of recipients sent.
    #[error("Mismatched response length. Expected {expected} receipts but received {received}")]
    MismatchedCount {
        /// Recipients in the batch.
        expected: usize,
        /// Receipts in the response.
        received: usize,
    },

    /// Client configuration is invalid or could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] pushgate_config::ConfigError),
}

impl PushError {
    /// Check if this error was raised before any request was made.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::MalformedToken(_) | Self::Validation(_) | Self::Serialization(_) | Self::Config(_)
        )
    }

    /// Check if this is an authentication failure reported by the gateway.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::GatewayStatus(GatewayStatusError::Unauthorized(_)))
    }
}

fn summarize(errors: &[Map<String, Value>]) -> String {
    errors
        .iter()
        .map(|entry| match entry.get("message").and_then(Value::as_str) {
            Some(message) => message.to_string(),
            None => Value::Object(entry.clone()).to_string(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Malformed batch shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A message has an empty recipient list.
    #[error("No recipients in message {message}")]
    NoRecipients {
        /// Position of the message in the batch.
        message: usize,
    },

    /// A recipient token is the empty string.
    #[error("Invalid push token: recipient {recipient} of message {message} is empty")]
    EmptyToken {
        /// Position of the message in the batch.
        message: usize,
        /// Position of the token in the message.
        recipient: usize,
    },
}

/// Non-2xx status from the gateway. The body is not inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GatewayStatusError {
    /// 401 or 403.
    #[error("Invalid access token (HTTP {0})")]
    Unauthorized(u16),

    /// Any other non-success status.
    #[error("Invalid response (HTTP {0})")]
    Unexpected(u16),
}

impl GatewayStatusError {
    /// Classify a status code, returning `None` for 2xx.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 | 403 => Some(Self::Unauthorized(status)),
            _ => Some(Self::Unexpected(status)),
        }
    }

    /// The HTTP status code.
    pub fn status(&self) -> u16 {
        match self {
            Self::Unauthorized(status) | Self::Unexpected(status) => *status,
        }
    }
}

/// Failure reported for a single recipient.
///
/// Produced by [`PushReceipt::validate`](crate::PushReceipt::validate). The
/// display text is the gateway's message for that receipt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiptError {
    /// The token is no longer valid. Stop sending to it.
    #[error("{message}")]
    DeviceNotRegistered {
        /// Recipient the receipt belongs to.
        token: Option<PushToken>,
        /// Gateway message.
        message: String,
    },

    /// The notification payload exceeded 4096 bytes.
    #[error("{message}")]
    MessageTooBig {
        /// Recipient the receipt belongs to.
        token: Option<PushToken>,
        /// Gateway message.
        message: String,
    },

    /// Too many messages to this device. Back off before retrying.
    #[error("{message}")]
    MessageRateExceeded {
        /// Recipient the receipt belongs to.
        token: Option<PushToken>,
        /// Gateway message.
        message: String,
    },

    /// Any other failure.
    #[error("{message}")]
    Other {
        /// Recipient the receipt belongs to.
        token: Option<PushToken>,
        /// Unrecognized `details.error` code, if one was given.
        code: Option<String>,
        /// Gateway message.
        message: String,
    },
}

impl ReceiptError {
    /// The recipient the failure belongs to.
    pub fn token(&self) -> Option<&PushToken> {
        match self {
            Self::DeviceNotRegistered { token, .. }
            | Self::MessageTooBig { token, .. }
            | Self::MessageRateExceeded { token, .. }
            | Self::Other { token, .. } => token.as_ref(),
        }
    }

    /// The gateway message.
    pub fn message(&self) -> &str {
        match self {
            Self::DeviceNotRegistered { message, .. }
            | Self::MessageTooBig { message, .. }
            | Self::MessageRateExceeded { message, .. }
            | Self::Other { message, .. } => message,
        }
    }

    /// Check if the token should be dropped from the caller's records.
    pub fn should_remove_device(&self) -> bool {
        matches!(self, Self::DeviceNotRegistered { .. })
    }

    /// Check if sending again later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::MessageRateExceeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(GatewayStatusError::from_status(200), None);
        assert_eq!(GatewayStatusError::from_status(204), None);
        assert_eq!(
            GatewayStatusError::from_status(401),
            Some(GatewayStatusError::Unauthorized(401))
        );
        assert_eq!(
            GatewayStatusError::from_status(403),
            Some(GatewayStatusError::Unauthorized(403))
        );
        assert_eq!(
            GatewayStatusError::from_status(500),
            Some(GatewayStatusError::Unexpected(500))
        );
        assert_eq!(
            GatewayStatusError::from_status(302),
            Some(GatewayStatusError::Unexpected(302))
        );
        assert_eq!(GatewayStatusError::Unexpected(429).status(), 429);
    }

    #[test]
    fn test_mismatched_count_display() {
        let err = PushError::MismatchedCount {
            expected: 3,
            received: 2,
        };
        assert_eq!(
            err.to_string(),
            "Mismatched response length. Expected 3 receipts but received 2"
        );
    }

    #[test]
    fn test_gateway_request_display() {
        let entry: Map<String, Value> = serde_json::from_str(
            r#"{"code": "API_ERROR", "message": "\"to\" must be a string"}"#,
        )
        .unwrap();
        let err = PushError::GatewayRequest {
            errors: vec![entry],
            envelope: Box::default(),
        };
        assert!(err.to_string().contains("\"to\" must be a string"));
    }

    #[test]
    fn test_error_predicates() {
        assert!(PushError::MalformedToken("x".into()).is_local());
        assert!(PushError::from(ValidationError::NoRecipients { message: 0 }).is_local());
        assert!(PushError::from(GatewayStatusError::Unauthorized(401)).is_unauthorized());
        assert!(!PushError::from(GatewayStatusError::Unexpected(500)).is_unauthorized());
        assert!(!PushError::MalformedResponse("x".into()).is_local());
    }

    #[test]
    fn test_receipt_error_policies() {
        let gone = ReceiptError::DeviceNotRegistered {
            token: None,
            message: "gone".into(),
        };
        assert!(gone.should_remove_device());
        assert!(!gone.is_retryable());
        assert_eq!(gone.to_string(), "gone");

        let slow_down = ReceiptError::MessageRateExceeded {
            token: None,
            message: "slow down".into(),
        };
        assert!(slow_down.is_retryable());
        assert_eq!(slow_down.message(), "slow down");
    }
}
