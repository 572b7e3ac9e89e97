//! Response reconciliation.
//!
//! The gateway answers a batch with one flat `data` array. Receipt `i`
//! belongs to the `i`-th recipient when the batch is walked message by
//! message and, inside each message, token by token. This module checks the
//! envelope and hands every receipt its single-recipient message.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{PreparedBatch, PushError, PushReceipt, ReceiptPayload, Result};

/// Top-level JSON object returned for a publish call.
///
/// Exactly one of the two fields is expected: `data` on success, `errors`
/// when the request was rejected as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GatewayEnvelope {
    /// Receipts, one per recipient, in flattening order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<ReceiptPayload>>,
    /// Request-level errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Map<String, Value>>>,
}

/// Match a response body against the batch that produced it.
pub fn reconcile(body: &[u8], batch: &PreparedBatch<'_>) -> Result<Vec<PushReceipt>> {
    let envelope: GatewayEnvelope = serde_json::from_slice(body)
        .map_err(|e| PushError::MalformedResponse(e.to_string()))?;

    if let Some(errors) = envelope.errors.as_ref().filter(|errors| !errors.is_empty()) {
        debug!(errors = errors.len(), "Gateway rejected request");
        return Err(PushError::GatewayRequest {
            errors: errors.clone(),
            envelope: Box::new(envelope),
        });
    }

    let Some(data) = envelope.data else {
        return Err(PushError::MalformedResponse(
            "response has neither `data` nor `errors`".to_string(),
        ));
    };

    let expected = batch.expected_receipts();
    if data.len() != expected {
        return Err(PushError::MismatchedCount {
            expected,
            received: data.len(),
        });
    }

    debug!(receipts = expected, "Reconciled gateway receipts");

    Ok(data
        .into_iter()
        .zip(batch.flatten())
        .map(|(payload, message)| PushReceipt::from_payload(payload, message))
        .collect())
}
