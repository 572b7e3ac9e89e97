// Pushgate - batch push notifications through an Expo-compatible gateway
//
// This crate re-exports the workspace crates: the dispatcher and its types
// from pushgate-push, the default HTTP transport, the configuration layer
// the dispatcher reads from, and optionally the logging helpers.

// Re-export the dispatcher
pub use pushgate_push::*;

// Re-export the default transport
pub use pushgate_http_client as http_client;

// Re-export the configuration layer
pub use pushgate_config;

// Re-export optional crates
#[cfg(feature = "log")]
pub use pushgate_log;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ClientConfig, GatewayStatusError, Priority, PushClient, PushError, PushMessage,
        PushReceipt, PushToken, ReceiptError, ReceiptStatus, Transport,
    };

    pub use pushgate_config::{ConfigService, ENV_PREFIX};
}
