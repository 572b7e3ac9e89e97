//! Per-recipient delivery receipts.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{PushMessage, ReceiptError};

/// `details.error` code for a token that is no longer registered.
pub const DEVICE_NOT_REGISTERED: &str = "DeviceNotRegistered";
/// `details.error` code for a payload over 4096 bytes.
pub const MESSAGE_TOO_BIG: &str = "MessageTooBig";
/// `details.error` code for sending to a device too often.
pub const MESSAGE_RATE_EXCEEDED: &str = "MessageRateExceeded";

/// Receipt status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    /// Accepted by the gateway.
    Ok,
    /// Rejected for this recipient.
    Error,
    /// A status this client does not know; treated as a failure.
    #[serde(other)]
    Unknown,
}

/// A receipt exactly as it appears in the gateway's `data` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptPayload {
    /// Outcome.
    pub status: ReceiptStatus,
    /// Human readable reason, present on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Structured details; `error` holds the machine-readable code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
}

/// The outcome for one recipient of a publish call.
#[derive(Debug, Clone, PartialEq)]
pub struct PushReceipt {
    /// Outcome.
    pub status: ReceiptStatus,
    /// Human readable reason, present on failure.
    pub message: Option<String>,
    /// Structured details from the gateway.
    pub details: Map<String, Value>,
    /// The message this receipt answers, narrowed to its one recipient.
    pub push_message: PushMessage,
}

impl PushReceipt {
    /// Pair a wire receipt with the single-recipient message it answers.
    pub fn from_payload(payload: ReceiptPayload, push_message: PushMessage) -> Self {
        Self {
            status: payload.status,
            message: payload.message,
            details: payload.details.unwrap_or_default(),
            push_message,
        }
    }

    /// Check if the gateway accepted this delivery.
    pub fn is_success(&self) -> bool {
        self.status == ReceiptStatus::Ok
    }

    /// The `details.error` code, if the gateway sent one.
    pub fn details_error(&self) -> Option<&str> {
        self.details.get("error").and_then(Value::as_str)
    }

    /// Turn a failed receipt into a classified error.
    ///
    /// Callers decide what to do per kind, e.g. drop the token on
    /// [`ReceiptError::DeviceNotRegistered`] or back off on
    /// [`ReceiptError::MessageRateExceeded`].
    pub fn validate(&self) -> std::result::Result<(), ReceiptError> {
        if self.is_success() {
            return Ok(());
        }

        let token = self.push_message.to.first().cloned();
        let message = self
            .message
            .clone()
            .unwrap_or_else(|| "unknown push receipt error".to_string());

        Err(match self.details_error() {
            Some(DEVICE_NOT_REGISTERED) => ReceiptError::DeviceNotRegistered { token, message },
            Some(MESSAGE_TOO_BIG) => ReceiptError::MessageTooBig { token, message },
            Some(MESSAGE_RATE_EXCEEDED) => ReceiptError::MessageRateExceeded { token, message },
            code => ReceiptError::Other {
                token,
                code: code.map(str::to_string),
                message,
            },
        })
    }
}
