//! Dispatcher configuration.

use std::sync::Arc;

use pushgate_config::{ConfigService, ConfigValidator, Validate};

use crate::{Result, Transport};

/// Default gateway host.
pub const DEFAULT_HOST: &str = "https://exp.host";

/// Default API path under the host.
pub const DEFAULT_API_PATH: &str = "/--/api/v2";

const SEND_PATH: &str = "/push/send";

/// Settings for a [`PushClient`](crate::PushClient).
///
/// Every field is optional, and an empty or blank string counts as unset.
/// The endpoint is `url` when set, otherwise `<host><api_path>/push/send`.
#[derive(Clone, Default)]
pub struct ClientConfig {
    /// Gateway host, e.g. `https://exp.host`.
    pub host: Option<String>,
    /// Path prefix of the push API, e.g. `/--/api/v2`.
    pub api_path: Option<String>,
    /// Full endpoint URL; overrides `host` and `api_path`.
    pub url: Option<String>,
    /// Bearer token for gateways with enhanced push security.
    pub access_token: Option<String>,
    /// Transport to use instead of the default HTTP client.
    pub transport: Option<Arc<dyn Transport>>,
}

impl ClientConfig {
    /// Create a config with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Read `host`, `api_path`, `url` and `access_token` from a config
    /// service. Missing or blank keys stay unset.
    pub fn from_config(config: &ConfigService) -> Result<Self> {
        let config = Self {
            host: non_blank(config.get_optional("host")?),
            api_path: non_blank(config.get_optional("api_path")?),
            url: non_blank(config.get_optional("url")?),
            access_token: non_blank(config.get_optional("access_token")?),
            transport: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// The resolved host.
    pub fn host(&self) -> &str {
        set(&self.host).unwrap_or(DEFAULT_HOST)
    }

    /// The resolved API path.
    pub fn api_path(&self) -> &str {
        set(&self.api_path).unwrap_or(DEFAULT_API_PATH)
    }

    /// The access token, if one is set.
    pub fn token(&self) -> Option<&str> {
        set(&self.access_token)
    }

    /// The URL publish calls are sent to.
    pub fn endpoint(&self) -> String {
        match set(&self.url) {
            Some(url) => url.to_string(),
            None => format!("{}{}{}", self.host(), self.api_path(), SEND_PATH),
        }
    }
}

/// `Some` only for a value that is not empty or whitespace.
fn set(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Validate for ClientConfig {
    fn validate(&self) -> pushgate_config::Result<()> {
        if let Some(host) = set(&self.host) {
            ConfigValidator::is_url(host, "host")?;
        }
        if let Some(api_path) = set(&self.api_path) {
            ConfigValidator::starts_with(api_path, "/", "api_path")?;
        }
        if let Some(url) = set(&self.url) {
            ConfigValidator::is_url(url, "url")?;
        }
        ConfigValidator::is_url(&self.endpoint(), "endpoint")
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("api_path", &self.api_path)
            .field("url", &self.url)
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .field("transport", &self.transport.as_ref().map(|_| "custom"))
            .finish()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the gateway host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = non_blank(Some(host.into()));
        self
    }

    /// Set the API path.
    pub fn api_path(mut self, api_path: impl Into<String>) -> Self {
        self.config.api_path = non_blank(Some(api_path.into()));
        self
    }

    /// Set the full endpoint URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.url = non_blank(Some(url.into()));
        self
    }

    /// Set the access token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.access_token = non_blank(Some(token.into()));
        self
    }

    /// Use a custom transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.config.transport = Some(transport);
        self
    }

    /// Build the config.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pushgate_config::ConfigManager;

    #[test]
    fn test_default_endpoint() {
        let config = ClientConfig::new();
        assert_eq!(config.endpoint(), "https://exp.host/--/api/v2/push/send");
    }

    #[test]
    fn test_host_and_path() {
        let config = ClientConfig::builder()
            .host("http://localhost:8080")
            .api_path("/v3")
            .build();
        assert_eq!(config.endpoint(), "http://localhost:8080/v3/push/send");
    }

    #[test]
    fn test_url_overrides_host() {
        let config = ClientConfig::builder()
            .host("https://ignored.example")
            .url("https://push.example.com/send")
            .build();
        assert_eq!(config.endpoint(), "https://push.example.com/send");
    }

    #[test]
    fn test_validation() {
        assert!(ClientConfig::new().validate().is_ok());
        assert!(ClientConfig::builder().host("exp.host").build().validate().is_err());
        assert!(ClientConfig::builder().api_path("v2").build().validate().is_err());
        assert!(ClientConfig::builder().url("ftp://x").build().validate().is_err());
        assert!(ClientConfig::builder().host("http://bad host").build().validate().is_err());
        assert!(ClientConfig::builder().api_path("/has space/ok").build().validate().is_ok());
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = ClientConfig::builder()
            .host("")
            .api_path("  ")
            .url("")
            .access_token("")
            .build();
        assert!(config.host.is_none());
        assert!(config.access_token.is_none());
        assert_eq!(config.endpoint(), "https://exp.host/--/api/v2/push/send");
        assert!(config.validate().is_ok());

        let literal = ClientConfig {
            host: Some(String::new()),
            access_token: Some(" ".to_string()),
            ..ClientConfig::default()
        };
        assert_eq!(literal.host(), DEFAULT_HOST);
        assert_eq!(literal.token(), None);
        assert!(literal.validate().is_ok());
    }

    #[test]
    fn test_from_config_blank_values_fall_back() {
        let manager = ConfigManager::new();
        manager.set("host", "").unwrap();
        manager.set("url", "  ").unwrap();
        manager.set("access_token", "").unwrap();
        let service = ConfigService::from_manager(manager);

        let config = ClientConfig::from_config(&service).unwrap();
        assert!(config.host.is_none());
        assert!(config.url.is_none());
        assert!(config.access_token.is_none());
        assert_eq!(config.endpoint(), "https://exp.host/--/api/v2/push/send");
    }

    #[test]
    fn test_from_config_rejects_unparsable_host() {
        let manager = ConfigManager::new();
        manager.set("host", "http://bad host").unwrap();
        let service = ConfigService::from_manager(manager);

        let err = ClientConfig::from_config(&service).unwrap_err();
        assert!(matches!(err, crate::PushError::Config(_)));
        assert!(err.is_local());
    }

    #[test]
    fn test_debug_masks_token() {
        let config = ClientConfig::builder().access_token("s3cr3t").build();
        assert!(!format!("{:?}", config).contains("s3cr3t"));
    }

    #[test]
    fn test_from_config() {
        let manager = ConfigManager::new();
        manager.set("host", "http://127.0.0.1:9000").unwrap();
        manager.set("access_token", "token").unwrap();
        let service = ConfigService::from_manager(manager);

        let config = ClientConfig::from_config(&service).unwrap();
        assert_eq!(config.endpoint(), "http://127.0.0.1:9000/--/api/v2/push/send");
        assert_eq!(config.access_token.as_deref(), Some("token"));
        assert!(config.url.is_none());
    }

    #[test]
    fn test_from_config_rejects_bad_values() {
        let manager = ConfigManager::new();
        manager.set("api_path", "no-slash").unwrap();
        let service = ConfigService::from_manager(manager);

        assert!(matches!(
            ClientConfig::from_config(&service),
            Err(crate::PushError::Config(_))
        ));
    }
}
