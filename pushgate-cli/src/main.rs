//! Pushgate CLI - send push notifications from the command line.
//!
//! # Commands
//!
//! - `pushgate send --to <TOKEN> --body <TEXT>` - Publish one message
//! - `pushgate validate-token <TOKEN>...` - Check token format
//! - `pushgate config` - Show the effective endpoint settings

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use pushgate_push::Priority;

mod commands;
mod error;

use commands::{config, send, token};
use error::CliResult;

/// Pushgate CLI - push notifications through an Expo-compatible gateway
#[derive(Parser)]
#[command(name = "pushgate")]
#[command(version)]
#[command(about = "Send push notifications through an Expo-compatible push gateway")]
#[command(long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = format!(
    "{}\n  {} pushgate send --to 'ExponentPushToken[xxx]' --body 'Hello'\n  {} pushgate validate-token 'ExponentPushToken[xxx]'\n  {} PUSHGATE_ACCESS_TOKEN=... pushgate config",
    "Examples:".bright_cyan().bold(),
    "$".dimmed(),
    "$".dimmed(),
    "$".dimmed(),
))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish a message and print its receipts
    #[command(alias = "s")]
    Send(SendArgs),

    /// Check that tokens have the expected prefix
    #[command(alias = "v")]
    ValidateToken {
        /// Tokens to check
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Show the effective endpoint settings
    #[command(alias = "c")]
    Config(ConfigArgs),
}

#[derive(Args)]
struct SendArgs {
    /// Recipient token (repeatable)
    #[arg(long, required = true)]
    to: Vec<String>,

    /// Message text
    #[arg(long)]
    body: String,

    /// Title
    #[arg(long)]
    title: Option<String>,

    /// Sound to play, e.g. `default`
    #[arg(long)]
    sound: Option<String>,

    /// Seconds the gateway may hold the message
    #[arg(long)]
    ttl: Option<u32>,

    /// UNIX timestamp after which the message is dropped
    #[arg(long)]
    expiration: Option<i64>,

    /// Delivery priority (default, normal, high)
    #[arg(long)]
    priority: Option<Priority>,

    /// Badge count
    #[arg(long)]
    badge: Option<u32>,

    /// Android notification channel
    #[arg(long)]
    channel_id: Option<String>,

    /// Extra data as key=value (repeatable)
    #[arg(long = "data", value_name = "KEY=VALUE")]
    data: Vec<String>,

    #[command(flatten)]
    config: ConfigArgs,

    /// Access token, overrides PUSHGATE_ACCESS_TOKEN
    #[arg(long)]
    access_token: Option<String>,

    /// Full endpoint URL, overrides PUSHGATE_URL
    #[arg(long)]
    url: Option<String>,
}

#[derive(Args)]
struct ConfigArgs {
    /// Configuration file (.json, .toml or .env)
    #[arg(long, env = "PUSHGATE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut log_config = pushgate_log::LogConfig::from_env();
    if cli.verbose {
        log_config = log_config.verbose();
    } else if cli.quiet {
        log_config = log_config.quiet();
    }
    if let Err(e) = pushgate_log::init(&log_config) {
        eprintln!("  {} logging disabled: {}", "⚠".yellow().bold(), e);
    }

    let result: CliResult<()> = match cli.command {
        Commands::Send(args) => {
            let options = send::SendOptions {
                to: args.to,
                body: args.body,
                title: args.title,
                sound: args.sound,
                ttl: args.ttl,
                expiration: args.expiration,
                priority: args.priority,
                badge: args.badge,
                channel_id: args.channel_id,
                data: args.data,
                config: args.config.config,
                access_token: args.access_token,
                url: args.url,
                quiet: cli.quiet,
            };
            send::run(options).await
        }

        Commands::ValidateToken { tokens } => token::run(&tokens, cli.quiet),

        Commands::Config(args) => config::run(args.config.as_ref()),
    };

    if let Err(e) = result {
        eprintln!("\n  {} {}\n", "Error:".red().bold(), e);
        std::process::exit(1);
    };
}
