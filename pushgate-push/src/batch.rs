//! Request building: validation and serialization of a batch.

use crate::{PushMessage, Result, ValidationError};

/// A validated batch, serialized and ready to send.
#[derive(Debug, Clone)]
pub struct PreparedBatch<'a> {
    messages: &'a [PushMessage],
    payload: Vec<u8>,
    expected_receipts: usize,
}

impl<'a> PreparedBatch<'a> {
    /// Validate and serialize a batch.
    ///
    /// Fails if a message has no recipients or a token is empty. No I/O
    /// happens here.
    pub fn prepare(messages: &'a [PushMessage]) -> Result<Self> {
        let mut expected_receipts = 0;

        for (index, message) in messages.iter().enumerate() {
            if message.to.is_empty() {
                return Err(ValidationError::NoRecipients { message: index }.into());
            }
            if let Some(position) = message.to.iter().position(|token| token.is_empty()) {
                return Err(ValidationError::EmptyToken {
                    message: index,
                    recipient: position,
                }
                .into());
            }
            expected_receipts += message.to.len();
        }

        let payload = serde_json::to_vec(messages)?;

        Ok(Self {
            messages,
            payload,
            expected_receipts,
        })
    }

    /// The messages in submission order.
    pub fn messages(&self) -> &'a [PushMessage] {
        self.messages
    }

    /// The JSON request body.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Total recipients across the batch; the response must carry this many
    /// receipts.
    pub fn expected_receipts(&self) -> usize {
        self.expected_receipts
    }

    /// Each recipient's single-recipient message, in flattening order:
    /// messages as submitted, recipients as listed within each message.
    pub fn flatten(&self) -> impl Iterator<Item = PushMessage> + use<'a> {
        self.messages
            .iter()
            .flat_map(|message| message.to.iter().map(|token| message.for_recipient(token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PushError, PushToken};

    fn token(id: &str) -> PushToken {
        PushToken::new(format!("ExponentPushToken[{}]", id)).unwrap()
    }

    #[test]
    fn test_expected_receipts_is_recipient_sum() {
        let batch = vec![
            PushMessage::new([token("a"), token("b")], "first"),
            PushMessage::new([token("c")], "second"),
            PushMessage::new([token("d"), token("e"), token("f")], "third"),
        ];

        let prepared = PreparedBatch::prepare(&batch).unwrap();
        assert_eq!(prepared.expected_receipts(), 6);
        assert_eq!(prepared.messages().len(), 3);
    }

    #[test]
    fn test_payload_is_json_array() {
        let batch = vec![PushMessage::new([token("a")], "hi").title("t")];
        let prepared = PreparedBatch::prepare(&batch).unwrap();

        let value: serde_json::Value = serde_json::from_slice(prepared.payload()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{"to": ["ExponentPushToken[a]"], "body": "hi", "title": "t"}])
        );
    }

    #[test]
    fn test_empty_batch() {
        let prepared = PreparedBatch::prepare(&[]).unwrap();
        assert_eq!(prepared.expected_receipts(), 0);
        assert_eq!(prepared.payload(), b"[]");
    }

    #[test]
    fn test_no_recipients() {
        let batch = vec![
            PushMessage::new([token("a")], "ok"),
            PushMessage::new([], "nobody"),
        ];

        let err = PreparedBatch::prepare(&batch).unwrap_err();
        assert!(matches!(
            err,
            PushError::Validation(ValidationError::NoRecipients { message: 1 })
        ));
    }

    #[test]
    fn test_empty_token() {
        let batch = vec![PushMessage::new(
            [token("a"), PushToken::new_unchecked("")],
            "hi",
        )];

        let err = PreparedBatch::prepare(&batch).unwrap_err();
        assert!(matches!(
            err,
            PushError::Validation(ValidationError::EmptyToken {
                message: 0,
                recipient: 1
            })
        ));
    }

    #[test]
    fn test_flatten_order() {
        let batch = vec![
            PushMessage::new([token("a"), token("b")], "first"),
            PushMessage::new([token("c")], "second"),
        ];
        let prepared = PreparedBatch::prepare(&batch).unwrap();

        let flat: Vec<_> = prepared
            .flatten()
            .map(|m| (m.body, m.to[0].to_string()))
            .collect();
        assert_eq!(
            flat,
            vec![
                ("first".to_string(), "ExponentPushToken[a]".to_string()),
                ("first".to_string(), "ExponentPushToken[b]".to_string()),
                ("second".to_string(), "ExponentPushToken[c]".to_string()),
            ]
        );
    }
}
