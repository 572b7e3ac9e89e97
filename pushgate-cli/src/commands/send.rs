//! Send command - publish one message and report receipts.

use std::path::PathBuf;

use colored::Colorize;
use pushgate_push::{ClientConfig, Priority, PushClient, PushMessage, PushReceipt, PushToken};
use serde_json::Value;

use crate::error::{CliError, CliResult};

/// Options for the send command.
#[derive(Debug, Default)]
pub struct SendOptions {
    pub to: Vec<String>,
    pub body: String,
    pub title: Option<String>,
    pub sound: Option<String>,
    pub ttl: Option<u32>,
    pub expiration: Option<i64>,
    pub priority: Option<Priority>,
    pub badge: Option<u32>,
    pub channel_id: Option<String>,
    pub data: Vec<String>,
    pub config: Option<PathBuf>,
    pub access_token: Option<String>,
    pub url: Option<String>,
    pub quiet: bool,
}

/// Publish the message and print one line per receipt.
pub async fn run(options: SendOptions) -> CliResult<()> {
    let message = build_message(&options)?;

    let service = super::load_config(options.config.as_ref())?;
    let mut config = ClientConfig::from_config(&service)?;
    if let Some(token) = options.access_token {
        config.access_token = Some(token);
    }
    if let Some(url) = options.url {
        config.url = Some(url);
    }

    let client = PushClient::new(config)?;
    tracing::debug!(endpoint = client.endpoint(), "Sending");

    let receipts = client.publish(&message).await?;
    let failed = report(&receipts, options.quiet);

    if failed > 0 {
        return Err(CliError::Delivery {
            failed,
            total: receipts.len(),
        });
    }
    Ok(())
}

/// Build the message from command-line options.
pub fn build_message(options: &SendOptions) -> CliResult<PushMessage> {
    let tokens = options
        .to
        .iter()
        .map(PushToken::new)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CliError::InvalidArgument(e.to_string()))?;

    let mut message = PushMessage::new(tokens, options.body.clone());
    message.title = options.title.clone();
    message.sound = options.sound.clone();
    message.ttl = options.ttl;
    message.expiration = options.expiration;
    message.priority = options.priority;
    message.badge = options.badge;
    message.channel_id = options.channel_id.clone();

    for entry in &options.data {
        let (key, value) = parse_data(entry)?;
        message = message.data(key, value);
    }

    Ok(message)
}

/// Parse a `key=value` data entry. Values that parse as JSON keep their
/// type; anything else is a string.
fn parse_data(entry: &str) -> CliResult<(String, Value)> {
    let (key, raw) = entry
        .split_once('=')
        .ok_or_else(|| CliError::InvalidArgument(format!("expected key=value, got `{}`", entry)))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::InvalidArgument(format!(
            "empty key in data entry `{}`",
            entry
        )));
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

/// Print receipts and return how many failed.
fn report(receipts: &[PushReceipt], quiet: bool) -> usize {
    let mut failed = 0;

    for receipt in receipts {
        let token = receipt
            .push_message
            .to
            .first()
            .map(PushToken::as_str)
            .unwrap_or("?");

        match receipt.validate() {
            Ok(()) => {
                if !quiet {
                    println!("  {} {}", "✓".green().bold(), token);
                }
            }
            Err(e) => {
                failed += 1;
                let hint = if e.should_remove_device() {
                    " (remove this token)"
                } else if e.is_retryable() {
                    " (retry later)"
                } else {
                    ""
                };
                eprintln!("  {} {}: {}{}", "✗".red().bold(), token, e, hint.dimmed());
            }
        }
    }

    if !quiet {
        println!();
        println!(
            "  {} {} delivered, {} failed",
            "→".cyan(),
            receipts.len() - failed,
            failed
        );
    }

    failed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> SendOptions {
        SendOptions {
            to: vec!["ExponentPushToken[abc]".to_string()],
            body: "hello".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_message() {
        let mut options = options();
        options.title = Some("Title".to_string());
        options.priority = Some(Priority::High);
        options.data = vec!["count=3".to_string(), "name=bob".to_string()];

        let message = build_message(&options).unwrap();
        assert_eq!(message.to[0].as_str(), "ExponentPushToken[abc]");
        assert_eq!(message.title.as_deref(), Some("Title"));
        assert_eq!(message.priority, Some(Priority::High));
        assert_eq!(message.data["count"], 3);
        assert_eq!(message.data["name"], "bob");
    }

    #[test]
    fn test_build_message_rejects_bad_token() {
        let mut options = options();
        options.to = vec!["abc".to_string()];
        assert!(matches!(
            build_message(&options),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_data() {
        assert_eq!(
            parse_data("flag=true").unwrap(),
            ("flag".to_string(), Value::Bool(true))
        );
        assert_eq!(
            parse_data("url=a=b").unwrap(),
            ("url".to_string(), Value::String("a=b".to_string()))
        );
        assert!(parse_data("novalue").is_err());
        assert!(parse_data("=x").is_err());
    }
}
