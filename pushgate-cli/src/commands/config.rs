//! Config command - show the effective endpoint settings.

use std::path::PathBuf;

use colored::Colorize;
use pushgate_push::ClientConfig;

use crate::error::CliResult;

/// Print the resolved configuration.
pub fn run(file: Option<&PathBuf>) -> CliResult<()> {
    let service = super::load_config(file)?;
    let config = ClientConfig::from_config(&service)?;

    println!("{}", "Pushgate configuration".bright_cyan().bold());
    println!();
    for (label, value) in describe(&config) {
        println!("  {:<14} {}", format!("{}:", label).bright_white().bold(), value);
    }

    Ok(())
}

fn describe(config: &ClientConfig) -> Vec<(&'static str, String)> {
    vec![
        ("Host", config.host().to_string()),
        ("API path", config.api_path().to_string()),
        ("URL override", config.url.clone().unwrap_or_else(|| "-".to_string())),
        ("Endpoint", config.endpoint()),
        (
            "Access token",
            config
                .token()
                .map(mask)
                .unwrap_or_else(|| "-".to_string()),
        ),
    ]
}

/// Keep the last four characters of a secret.
fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}
