//! Configuration for the generator and its HTTP source.
//!
//! Settings can be loaded from a TOML file. Every field is optional and
//! falls back to its default; command-line flags override file values.
//!
//! # Example Config File
//!
//! ```toml
//! digest_input = "raw"        # or "binary_text"
//!
//! [source]
//! endpoint = "http://aws.random.cat/meow"
//! json_field = "file"
//! direct = false             # true downloads `endpoint` as the image itself
//! timeout_secs = 30
//! max_bytes = 20971520
//! user_agent = "imgrand/0.1.0"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::digest::DigestInput;
use crate::error::{Error, Result};

/// Endpoint returning a JSON document that points at a random cat image.
pub const DEFAULT_ENDPOINT: &str = "http://aws.random.cat/meow";

/// JSON field holding the image URL in the default endpoint's response.
pub const DEFAULT_JSON_FIELD: &str = "file";

/// Global timeout applied to each HTTP request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Largest image body accepted (20 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 20 * 1024 * 1024;

/// User-Agent header sent with each request.
pub const DEFAULT_USER_AGENT: &str = concat!("imgrand/", env!("CARGO_PKG_VERSION"));

/// Settings of [`HttpImageSource`](crate::source::http::HttpImageSource).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// URL queried on every fetch.
    pub endpoint: String,
    /// JSON field of the endpoint's response holding the image URL.
    pub json_field: String,
    /// Treat the endpoint's body as the image instead of a JSON document.
    pub direct: bool,
    /// Global timeout per request, in seconds.
    pub timeout_secs: u64,
    /// Maximum accepted body size, in bytes.
    pub max_bytes: u64,
    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            json_field: DEFAULT_JSON_FIELD.to_string(),
            direct: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_bytes: DEFAULT_MAX_BYTES,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SourceConfig {
    /// JSON field to follow, or `None` when the endpoint serves the image.
    pub fn image_url_field(&self) -> Option<&str> {
        if self.direct {
            None
        } else {
            Some(&self.json_field)
        }
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Checks that the settings are usable.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] for an empty endpoint or JSON field,
    /// a zero timeout or a zero size limit.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::InvalidConfig("endpoint must not be empty".into()));
        }
        if !self.direct && self.json_field.is_empty() {
            return Err(Error::InvalidConfig("json_field must not be empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(Error::InvalidConfig("timeout_secs must be positive".into()));
        }
        if self.max_bytes == 0 {
            return Err(Error::InvalidConfig("max_bytes must be positive".into()));
        }
        Ok(())
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// HTTP source settings.
    pub source: SourceConfig,
    /// Byte sequence fed to the hash primitives.
    pub digest_input: DigestInput,
}

impl Config {
    /// Loads and validates a configuration file.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] if the file cannot be read, parsed or
    /// validated.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] on parse or validation failure.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] if any section is invalid.
    pub fn validate(&self) -> Result<()> {
        self.source.validate()
    }
}
