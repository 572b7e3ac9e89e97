//! Outbound push message types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::PushToken;

/// Delivery priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Let the gateway pick.
    #[default]
    Default,
    /// Normal priority.
    Normal,
    /// High priority (may wake the device).
    High,
}

impl Priority {
    /// The wire name of this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Default => "default",
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Priority::Default),
            "normal" => Ok(Priority::Normal),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority `{}`", other)),
        }
    }
}

/// One notification addressed to one or more recipients.
///
/// A message with N tokens stands for N independent deliveries and receives
/// N receipts. Unset optional fields are left out of the request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushMessage {
    /// Recipients, in the order their receipts come back.
    pub to: Vec<PushToken>,
    /// Message text.
    pub body: String,
    /// Extra data handed to the app. The gateway caps the whole
    /// notification payload at 4096 bytes.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub data: Map<String, Value>,
    /// Sound to play; `"default"` for the device sound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    /// Title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Seconds the gateway may hold the message for redelivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// UNIX timestamp after which the message is dropped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<i64>,
    /// Delivery priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Unread count shown on the app icon (iOS). `0` clears it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,
    /// Android notification channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

impl PushMessage {
    /// Create a message for the given recipients.
    pub fn new(to: impl IntoIterator<Item = PushToken>, body: impl Into<String>) -> Self {
        Self {
            to: to.into_iter().collect(),
            body: body.into(),
            data: Map::new(),
            sound: None,
            title: None,
            ttl: None,
            expiration: None,
            priority: None,
            badge: None,
            channel_id: None,
        }
    }

    /// Add a recipient.
    pub fn to(mut self, token: PushToken) -> Self {
        self.to.push(token);
        self
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a data entry.
    pub fn data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Set the sound.
    pub fn sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    /// Set the time to live in seconds.
    pub fn ttl(mut self, seconds: u32) -> Self {
        self.ttl = Some(seconds);
        self
    }

    /// Set the absolute expiration as a UNIX timestamp.
    pub fn expiration(mut self, timestamp: i64) -> Self {
        self.expiration = Some(timestamp);
        self
    }

    /// Set priority.
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the badge count.
    pub fn badge(mut self, count: u32) -> Self {
        self.badge = Some(count);
        self
    }

    /// Set the Android channel.
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    /// Number of deliveries this message stands for.
    pub fn recipient_count(&self) -> usize {
        self.to.len()
    }

    /// A copy of this message addressed to `token` alone.
    pub fn for_recipient(&self, token: &PushToken) -> Self {
        Self {
            to: vec![token.clone()],
            ..self.clone()
        }
    }
}
