// Configuration validation

use crate::{ConfigError, Result};

/// Trait for validating configuration
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Field-level validation rules
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate that a value is not empty
    pub fn not_empty(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }

    /// Validate that a value parses as an absolute http(s) URL with a host
    pub fn is_url(value: &str, field: &str) -> Result<()> {
        let invalid = |reason: String| {
            ConfigError::ValidationError(format!(
                "{} must be an http(s) URL, got `{}`: {}",
                field, value, reason
            ))
        };

        let url = url::Url::parse(value).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host".to_string()));
        }
        Ok(())
    }

    /// Validate that a value starts with the given prefix
    pub fn starts_with(value: &str, prefix: &str, field: &str) -> Result<()> {
        if !value.starts_with(prefix) {
            return Err(ConfigError::ValidationError(format!(
                "{} must start with `{}`",
                field, prefix
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty_validation() {
        assert!(ConfigValidator::not_empty("value", "field").is_ok());
        assert!(ConfigValidator::not_empty("", "field").is_err());
        assert!(ConfigValidator::not_empty("   ", "field").is_err());
    }

    #[test]
    fn test_url_validation() {
        assert!(ConfigValidator::is_url("https://exp.host", "host").is_ok());
        assert!(ConfigValidator::is_url("http://localhost:8080", "host").is_ok());
        assert!(ConfigValidator::is_url("exp.host", "host").is_err());
        assert!(ConfigValidator::is_url("https://", "host").is_err());
        assert!(ConfigValidator::is_url("http://bad host", "host").is_err());
        assert!(ConfigValidator::is_url("ftp://exp.host", "host").is_err());
        assert!(ConfigValidator::is_url("https://exp.host/--/api/v2/push/send", "url").is_ok());
    }

    #[test]
    fn test_starts_with_validation() {
        assert!(ConfigValidator::starts_with("/--/api/v2", "/", "api_path").is_ok());
        assert!(ConfigValidator::starts_with("api/v2", "/", "api_path").is_err());
    }
}
