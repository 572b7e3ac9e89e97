//! Pushgate logging setup
//!
//! Library crates in this workspace only emit `tracing` events. Binaries call
//! [`init`] once at startup to install a subscriber configured from the
//! environment.
//!
//! # Usage
//!
//! ```rust,no_run
//! let config = pushgate_log::LogConfig::from_env();
//! pushgate_log::init(&config).expect("logger already installed");
//!
//! tracing::info!(port = 8080, "Ready");
//! ```
//!
//! # Environment Variables
//!
//! - `PUSHGATE_DEBUG=1` - Enable debug logging
//! - `PUSHGATE_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level
//! - `PUSHGATE_LOG_FORMAT=pretty|compact|json` - Set output format
//! - `PUSHGATE_LOG_COLOR=1|0` - Enable/disable colors
//!
//! `RUST_LOG`, when set, takes precedence over the level.

use std::env;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;

// ============================================================================
// Log Levels
// ============================================================================

/// Minimum level of events that get written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warning level
    Warn,
    /// Error level (least verbose)
    Error,
    /// Off (no logging)
    Off,
}

impl Level {
    /// Parse a level name, case-insensitively.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(Level::Trace),
            "debug" => Some(Level::Debug),
            "info" => Some(Level::Info),
            "warn" | "warning" => Some(Level::Warn),
            "error" => Some(Level::Error),
            "off" | "none" => Some(Level::Off),
            _ => None,
        }
    }

    /// The directive understood by `EnvFilter`.
    pub fn as_directive(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Off => "off",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_directive())
    }
}

// ============================================================================
// Log Format
// ============================================================================

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Multi-line human readable output
    Pretty,
    /// Compact single-line format
    Compact,
    /// JSON, one object per line
    Json,
}

impl Format {
    /// Parse a format name, case-insensitively.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Some(Format::Pretty),
            "compact" => Some(Format::Compact),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Whether debug mode is enabled
    pub debug: bool,
    /// Minimum log level
    pub level: Level,
    /// Output format
    pub format: Format,
    /// Whether ANSI colors are written
    pub color: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Compact,
            color: false,
        }
    }
}

impl LogConfig {
    /// Read the configuration from `PUSHGATE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| {
            lookup(key).map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        };

        let debug = flag("PUSHGATE_DEBUG").unwrap_or(false);

        let level = lookup("PUSHGATE_LOG_LEVEL")
            .and_then(|s| Level::from_name(&s))
            .unwrap_or(if debug { Level::Debug } else { Level::Info });

        let format = lookup("PUSHGATE_LOG_FORMAT")
            .and_then(|s| Format::from_name(&s))
            .unwrap_or(Format::Compact);

        let color = flag("PUSHGATE_LOG_COLOR")
            .unwrap_or_else(|| lookup("NO_COLOR").is_none() && lookup("TERM").is_some());

        Self {
            debug,
            level,
            format,
            color,
        }
    }

    /// Raise the level to at least `debug`.
    pub fn verbose(mut self) -> Self {
        self.debug = true;
        self.level = self.level.min(Level::Debug);
        self
    }

    /// Only let errors through.
    pub fn quiet(mut self) -> Self {
        self.level = Level::Error;
        self
    }

    /// The filter applied when `RUST_LOG` is not set.
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level.as_directive()))
    }
}

// ============================================================================
// Subscriber
// ============================================================================

/// Install the global `tracing` subscriber. Logs go to stderr.
///
/// Fails if a global subscriber is already installed.
pub fn init(config: &LogConfig) -> Result<(), TryInitError> {
    let layer = match config.format {
        Format::Pretty => fmt::layer()
            .pretty()
            .with_ansi(config.color)
            .with_writer(std::io::stderr)
            .boxed(),
        #[cfg(feature = "json")]
        Format::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
        _ => fmt::layer()
            .compact()
            .with_ansi(config.color)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(config.filter())
        .try_init()
}

// ============================================================================
// Tests
// ============================================================================
