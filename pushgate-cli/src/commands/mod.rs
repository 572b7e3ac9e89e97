//! CLI command implementations.

pub mod config;
pub mod send;
pub mod token;

use std::path::PathBuf;

use pushgate_config::{ConfigService, ENV_PREFIX};

use crate::error::CliResult;

/// Load settings from an optional file, `.env` and `PUSHGATE_*` variables.
///
/// Environment values override the file.
pub fn load_config(file: Option<&PathBuf>) -> CliResult<ConfigService> {
    let mut builder = ConfigService::builder()
        .with_prefix(ENV_PREFIX)
        .load_dotenv(None);

    if let Some(file) = file {
        builder = builder.add_file_auto(file.clone());
    }

    Ok(builder.build()?)
}
