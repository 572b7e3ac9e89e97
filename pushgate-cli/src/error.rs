//! Error types for the pushgate CLI.

use std::fmt;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    Config(String),

    /// Invalid argument
    InvalidArgument(String),

    /// Publish call failed
    Push(pushgate_push::PushError),

    /// Some receipts reported a failure
    Delivery { failed: usize, total: usize },

    /// Some tokens are malformed
    Validation(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Push(e) => write!(f, "{}", e),
            CliError::Delivery { failed, total } => {
                write!(f, "{} of {} deliveries failed", failed, total)
            }
            CliError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Push(e) => Some(e),
            _ => None,
        }
    }
}

impl From<pushgate_push::PushError> for CliError {
    fn from(e: pushgate_push::PushError) -> Self {
        match e {
            pushgate_push::PushError::Config(e) => CliError::Config(e.to_string()),
            e => CliError::Push(e),
        }
    }
}

impl From<pushgate_config::ConfigError> for CliError {
    fn from(e: pushgate_config::ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}
