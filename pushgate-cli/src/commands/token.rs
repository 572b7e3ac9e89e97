//! Token validation command.

use colored::Colorize;
use pushgate_push::PushToken;

use crate::error::{CliError, CliResult};

/// Check the prefix of each token. Fails if any token is malformed.
pub fn run(tokens: &[String], quiet: bool) -> CliResult<()> {
    let mut invalid = 0;

    for raw in tokens {
        match PushToken::new(raw.as_str()) {
            Ok(token) => {
                if !quiet {
                    println!("  {} {}", "✓".green().bold(), token);
                }
            }
            Err(e) => {
                invalid += 1;
                eprintln!("  {} {}", "✗".red().bold(), e);
            }
        }
    }

    if invalid > 0 {
        return Err(CliError::Validation(format!(
            "{} of {} tokens are malformed",
            invalid,
            tokens.len()
        )));
    }
    Ok(())
}
