//! HTTP image source.
//!
//! By default the endpoint answers with a small JSON document naming a
//! random image, for example `{"file": "https://.../cat.jpg"}`. The source
//! follows that URL and returns the image body exactly as downloaded; no
//! decoding or re-encoding is performed. With `direct` set, the endpoint's
//! own body is the image.

use ureq::Agent;

use super::byte_source::ByteSource;
use crate::config::SourceConfig;
use crate::error::{Error, Result};

/// Downloads a fresh image on every fetch.
pub struct HttpImageSource {
    agent: Agent,
    config: SourceConfig,
}

impl HttpImageSource {
    /// Creates a source from validated settings.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] if `config` fails validation.
    pub fn new(config: SourceConfig) -> Result<Self> {
        config.validate()?;
        let agent_config = Agent::config_builder()
            .timeout_global(Some(config.timeout()))
            .build();
        Ok(HttpImageSource {
            agent: Agent::new_with_config(agent_config),
            config,
        })
    }

    /// Returns the settings in use.
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    fn get_text(&self, url: &str) -> Result<String> {
        self.agent
            .get(url)
            .header("User-Agent", self.config.user_agent.as_str())
            .call()
            .map_err(|e| unavailable(url, e))?
            .body_mut()
            .read_to_string()
            .map_err(|e| unavailable(url, e))
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.agent
            .get(url)
            .header("User-Agent", self.config.user_agent.as_str())
            .call()
            .map_err(|e| unavailable(url, e))?
            .body_mut()
            .with_config()
            .limit(self.config.max_bytes)
            .read_to_vec()
            .map_err(|e| unavailable(url, e))
    }
}

impl ByteSource for HttpImageSource {
    fn fetch_bytes(&mut self) -> Result<Vec<u8>> {
        let image_url = match self.config.image_url_field() {
            Some(field) => {
                let body = self.get_text(&self.config.endpoint)?;
                extract_image_url(&body, field)?
            }
            None => self.config.endpoint.clone(),
        };
        tracing::debug!(url = %image_url, "downloading image");
        let bytes = self.get_bytes(&image_url)?;
        tracing::debug!(url = %image_url, len = bytes.len(), "downloaded image");
        Ok(bytes)
    }
}

fn unavailable(url: &str, err: ureq::Error) -> Error {
    Error::SourceUnavailable(format!("{}: {}", url, err))
}

/// Reads the image URL stored under `field` in a JSON document.
///
/// # Errors
/// Returns [`Error::SourceUnavailable`] if `body` is not JSON or the field is
/// missing, not a string, or empty.
pub fn extract_image_url(body: &str, field: &str) -> Result<String> {
    let doc: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| Error::SourceUnavailable(format!("malformed JSON response: {}", e)))?;
    match doc.get(field).and_then(serde_json::Value::as_str) {
        Some(url) if !url.trim().is_empty() => Ok(url.trim().to_string()),
        _ => Err(Error::SourceUnavailable(format!(
            "response has no image URL in field `{}`",
            field
        ))),
    }
}
