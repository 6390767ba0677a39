//! Rule configuration, loadable from TOML.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, DEFAULT_MESSAGE};

/// Configuration for a [`UrlRule`](crate::UrlRule).
///
/// ```toml
/// message = "must be a public web address"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Message attached to rejected values. Defaults to `"is an invalid URL"`.
    #[serde(default)]
    pub message: Option<String>,
}

impl RuleConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?cfg, "loaded rule config");
        Ok(cfg)
    }

    /// The configured message, or the default.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_MESSAGE)
    }
}
