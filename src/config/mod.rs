//! Client configuration.
//!
//! The crate consumes a small configuration surface: the app key/secret
//! pair, an optional base URL override, and the HTTP timeout. It can be
//! built programmatically or loaded from a TOML file:
//!
//! ```toml
//! app_key = "0123456789abcdef"
//! app_secret = "fedcba98"
//! # base_url = "https://api.netease.im/nimserver/"
//! # timeout_secs = 5
//! ```

mod error;


use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::dispatch::DEFAULT_BASE_URL;

pub use error::ConfigError;

/// Default HTTP exchange timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Configuration for a Yunxin API client.
#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Application key assigned by the platform console.
    pub app_key: String,

    /// Application secret paired with the key; never logged.
    pub app_secret: String,

    /// API base URL endpoint URIs are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP exchange timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    /// Creates a configuration with default base URL and timeout.
    #[must_use]
    pub fn new(app_key: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            app_secret: app_secret.into(),
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the HTTP timeout in whole seconds.
    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, is not
    /// valid TOML, or fails [`ClientConfig::validate`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on invalid TOML or failed validation.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that credentials are present, the base URL parses, and
    /// the timeout is non-zero.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_key.trim().is_empty() {
            return Err(ConfigError::MissingRequired {
                field: "app_key",
                hint: "Copy the app key from the platform console.",
            });
        }
        if self.app_secret.trim().is_empty() {
            return Err(ConfigError::MissingRequired {
                field: "app_secret",
                hint: "Copy the app secret from the platform console.",
            });
        }
        self.parsed_base_url()?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// The base URL as a parsed [`url::Url`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] when the string does not
    /// parse or cannot serve as a base.
    pub fn parsed_base_url(&self) -> Result<url::Url, ConfigError> {
        let url = url::Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: self.base_url.clone(),
                reason: "URL cannot serve as a base".to_string(),
            });
        }
        Ok(url)
    }

    /// The HTTP timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("app_key", &self.app_key)
            .field("app_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
