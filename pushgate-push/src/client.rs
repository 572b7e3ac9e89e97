//! The dispatcher.

use std::sync::Arc;

use pushgate_config::{ConfigService, Validate};
use pushgate_http_client::HttpClient;
use tracing::debug;

use crate::{
    ClientConfig, GatewayRequest, GatewayStatusError, PreparedBatch, PushMessage, PushReceipt,
    Result, Transport, reconcile,
};

/// Sends batches of push messages and returns one receipt per recipient.
///
/// Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct PushClient {
    endpoint: String,
    access_token: Option<String>,
    transport: Arc<dyn Transport>,
}

impl PushClient {
    /// Create a client. Without a configured transport a fresh
    /// [`HttpClient`] with default settings is used.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let endpoint = config.endpoint();
        let access_token = config.token().map(str::to_string);
        let transport = match config.transport {
            Some(transport) => transport,
            None => Arc::new(HttpClient::default_client()?),
        };

        Ok(Self {
            endpoint,
            access_token,
            transport,
        })
    }

    /// Create a client for the public gateway with no access token.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &ConfigService) -> Result<Self> {
        Self::new(ClientConfig::from_config(config)?)
    }

    /// The URL publish calls are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Publish a single message.
    pub async fn publish(&self, message: &PushMessage) -> Result<Vec<PushReceipt>> {
        self.publish_multiple(std::slice::from_ref(message)).await
    }

    /// Publish a batch in one request.
    ///
    /// Receipts come back in flattening order, each carrying its message
    /// narrowed to one recipient. Receipts are not validated here; call
    /// [`PushReceipt::validate`] on each.
    pub async fn publish_multiple(&self, messages: &[PushMessage]) -> Result<Vec<PushReceipt>> {
        let batch = PreparedBatch::prepare(messages)?;

        debug!(
            url = %self.endpoint,
            messages = messages.len(),
            expected_receipts = batch.expected_receipts(),
            "Publishing push batch"
        );

        let response = self
            .transport
            .send(GatewayRequest {
                url: self.endpoint.clone(),
                body: batch.payload().to_vec(),
                access_token: self.access_token.clone(),
            })
            .await?;

        let status = response.status().as_u16();
        debug!(status, "Gateway responded");

        if let Some(error) = GatewayStatusError::from_status(status) {
            return Err(error.into());
        }

        reconcile(response.bytes(), &batch)
    }
}

impl std::fmt::Debug for PushClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushClient")
            .field("endpoint", &self.endpoint)
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PushError;

    #[test]
    fn test_with_defaults() {
        let client = PushClient::with_defaults().unwrap();
        assert_eq!(client.endpoint(), "https://exp.host/--/api/v2/push/send");
    }

    #[test]
    fn test_invalid_config() {
        let config = ClientConfig::builder().host("not a url").build();
        assert!(matches!(PushClient::new(config), Err(PushError::Config(_))));
    }

    #[test]
    fn test_unparsable_host_fails_at_construction() {
        let config = ClientConfig::builder().host("http://bad host").build();
        let err = PushClient::new(config).unwrap_err();
        assert!(matches!(err, PushError::Config(_)));
        assert!(err.is_local());
    }

    #[test]
    fn test_blank_settings_use_defaults() {
        let config = ClientConfig {
            host: Some(String::new()),
            access_token: Some(String::new()),
            ..ClientConfig::default()
        };
        let client = PushClient::new(config).unwrap();
        assert_eq!(client.endpoint(), "https://exp.host/--/api/v2/push/send");
        assert!(client.access_token.is_none());
    }

    #[test]
    fn test_debug_hides_token() {
        let config = ClientConfig::builder().access_token("hunter2").build();
        let client = PushClient::new(config).unwrap();
        assert!(!format!("{:?}", client).contains("hunter2"));
    }

    #[test]
    fn test_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<PushClient>();
    }
}
