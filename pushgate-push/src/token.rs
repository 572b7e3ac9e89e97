//! Recipient token type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{PushError, Result};

/// Prefix every Expo push token starts with.
pub const TOKEN_PREFIX: &str = "ExponentPushToken";

/// A push token identifying one app installation.
///
/// Tokens built with [`PushToken::new`] or deserialized from JSON are checked
/// for [`TOKEN_PREFIX`]. Nothing else about the format is verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PushToken(String);

impl PushToken {
    /// Create a token, failing with [`PushError::MalformedToken`] when the
    /// prefix is missing.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if !token.starts_with(TOKEN_PREFIX) {
            return Err(PushError::MalformedToken(token));
        }
        Ok(Self(token))
    }

    /// Wrap a raw string without the prefix check.
    ///
    /// For tokens read back from trusted storage. The request builder still
    /// rejects empty tokens before anything is sent.
    pub fn new_unchecked(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token as sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PushToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PushToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PushToken {
    type Error = PushError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PushToken {
    type Error = PushError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl std::str::FromStr for PushToken {
    type Err = PushError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<PushToken> for String {
    fn from(token: PushToken) -> Self {
        token.0
    }
}
