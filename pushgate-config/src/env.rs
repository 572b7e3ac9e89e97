// Environment variable loading

use crate::{ConfigError, Result};
use std::collections::HashMap;
use std::env;

/// Environment variable loader.
///
/// With a prefix, only `PREFIX_*` variables are picked up and the prefix is
/// stripped: `PUSHGATE_API_PATH` becomes the key `api_path`.
pub struct EnvLoader {
    prefix: Option<String>,
}

impl EnvLoader {
    /// Create a new environment loader
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    /// Load all matching variables from the process environment
    pub fn load(&self) -> HashMap<String, String> {
        self.collect(env::vars())
    }

    /// Apply the prefix rules to an arbitrary set of variables
    pub fn collect<I>(&self, vars: I) -> HashMap<String, String>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = HashMap::new();

        for (key, value) in vars {
            match self.strip_prefix(&key) {
                Some(stripped) if !stripped.is_empty() => {
                    config.insert(stripped.to_lowercase(), value);
                }
                _ => {}
            }
        }

        config
    }

    fn strip_prefix<'k>(&self, key: &'k str) -> Option<&'k str> {
        match self.prefix.as_deref() {
            Some(prefix) => key.strip_prefix(prefix)?.strip_prefix('_'),
            None => Some(key),
        }
    }

    /// Load a specific environment variable
    pub fn load_var(&self, key: &str) -> Result<String> {
        env::var(self.full_key(key)).map_err(ConfigError::EnvError)
    }

    /// The variable name a key maps to
    pub fn full_key(&self, key: &str) -> String {
        match self.prefix {
            Some(ref prefix) => format!("{}_{}", prefix, key.to_uppercase()),
            None => key.to_uppercase(),
        }
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(None)
    }
}
