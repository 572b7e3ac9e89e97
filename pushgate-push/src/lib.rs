//! # Pushgate Push
//!
//! Batch push notifications through an Expo-compatible push gateway.
//!
//! ## Features
//!
//! - **Batching**: many messages, many recipients, one request
//! - **Receipts**: one per recipient, each pointing back at its message
//! - **Classification**: per-recipient failures as typed errors
//! - **Pluggable transport**: bring your own HTTP stack or a test double
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pushgate_push::{PushClient, PushMessage, PushToken};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PushClient::with_defaults()?;
//!
//!     let token = PushToken::new("ExponentPushToken[xxxxxxxxxxxxxxxxxxxxxx]")?;
//!     let message = PushMessage::new([token], "You have a new message!")
//!         .title("Inbox")
//!         .data("message_id", "12345")
//!         .badge(1);
//!
//!     for receipt in client.publish(&message).await? {
//!         if let Err(e) = receipt.validate() {
//!             eprintln!("{}: {}", receipt.push_message.to[0], e);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Handling Failed Receipts
//!
//! ```rust,ignore
//! match receipt.validate() {
//!     Ok(()) => {}
//!     Err(e) if e.should_remove_device() => store.forget(e.token()),
//!     Err(e) if e.is_retryable() => queue.later(receipt.push_message),
//!     Err(e) => tracing::warn!(error = %e, "push failed"),
//! }
//! ```

mod batch;
mod client;
mod config;
mod error;
mod message;
mod receipt;
mod reconcile;
mod token;
mod transport;

pub use batch::PreparedBatch;
pub use client::PushClient;
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_API_PATH, DEFAULT_HOST};
pub use error::{GatewayStatusError, PushError, ReceiptError, Result, ValidationError};
pub use message::{Priority, PushMessage};
pub use receipt::{
    DEVICE_NOT_REGISTERED, MESSAGE_RATE_EXCEEDED, MESSAGE_TOO_BIG, PushReceipt, ReceiptPayload,
    ReceiptStatus,
};
pub use reconcile::{GatewayEnvelope, reconcile};
pub use token::{PushToken, TOKEN_PREFIX};
pub use transport::{GatewayRequest, Transport};

/// Prelude for common imports.
///
/// ```
/// use pushgate_push::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::PushClient;
    pub use crate::config::ClientConfig;
    pub use crate::error::{PushError, ReceiptError, Result};
    pub use crate::message::{Priority, PushMessage};
    pub use crate::receipt::{PushReceipt, ReceiptStatus};
    pub use crate::token::PushToken;
    pub use crate::transport::Transport;
}
