//! # Pushgate HTTP Client
//!
//! A small HTTP client wrapper around `reqwest` that serves as the default
//! transport for pushgate.
//!
//! The client performs exactly one exchange per request. It deliberately has
//! no retry loop and no circuit breaker: callers that need those policies
//! wrap the client or plug in their own transport.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pushgate_http_client::{HttpClient, HttpClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::new(HttpClientConfig::default())?;
//!
//!     let response = client
//!         .post("https://exp.host/--/api/v2/push/send")
//!         .json(&serde_json::json!([{"to": ["ExponentPushToken[xxx]"], "body": "hi"}]))
//!         .send()
//!         .await?;
//!
//!     println!("Status: {}", response.status());
//!     Ok(())
//! }
//! ```
//!
//! ## With Timeouts
//!
//! ```rust,no_run
//! use pushgate_http_client::{HttpClient, HttpClientConfig};
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpClientConfig::builder()
//!     .timeout(Duration::from_secs(30))
//!     .connect_timeout(Duration::from_secs(5))
//!     .build();
//!
//! let client = HttpClient::new(config)?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;

pub use client::HttpClient;
pub use config::{HttpClientConfig, HttpClientConfigBuilder};
pub use error::{HttpClientError, Result};
pub use request::RequestBuilder;
pub use response::Response;

// Re-export common types
pub use bytes::Bytes;
pub use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
pub use url::Url;

/// Prelude for common imports.
///
/// ```
/// use pushgate_http_client::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::HttpClient;
    pub use crate::config::{HttpClientConfig, HttpClientConfigBuilder};
    pub use crate::error::{HttpClientError, Result};
    pub use crate::request::RequestBuilder;
    pub use crate::response::Response;
    pub use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
}
