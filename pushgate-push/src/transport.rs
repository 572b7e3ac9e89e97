//! Network transport.

use async_trait::async_trait;
use pushgate_http_client::{HttpClient, Response, header};

/// A single POST to the gateway.
#[derive(Clone)]
pub struct GatewayRequest {
    /// Absolute endpoint URL.
    pub url: String,
    /// JSON request body.
    pub body: Vec<u8>,
    /// Sent as a bearer token when present.
    pub access_token: Option<String>,
}

impl std::fmt::Debug for GatewayRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayRequest")
            .field("url", &self.url)
            .field("body_len", &self.body.len())
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Performs the wire exchange for a publish call.
///
/// Implementations return whatever the server sent, whatever the status.
/// Status classification and body parsing happen in the dispatcher.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the raw response.
    async fn send(&self, request: GatewayRequest) -> pushgate_http_client::Result<Response>;
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: GatewayRequest) -> pushgate_http_client::Result<Response> {
        let mut builder = self
            .post(request.url)
            .header(header::CONTENT_TYPE.as_str(), "application/json")
            .header(header::ACCEPT.as_str(), "application/json")
            .body(request.body);

        if let Some(token) = request.access_token {
            builder = builder.bearer_auth(token);
        }

        builder.send().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_masks_token() {
        let request = GatewayRequest {
            url: "https://exp.host/--/api/v2/push/send".to_string(),
            body: b"[]".to_vec(),
            access_token: Some("secret".to_string()),
        };

        let debug = format!("{:?}", request);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("body_len: 2"));
    }
}
