//! Client configuration types.
//!
//! [`ClientConfig`] holds the immutable request-routing parameters: the API
//! base URL, the version path segment, the request timeout, and any default
//! header overrides. All fields carry serde defaults so the struct can be
//! deserialized from configuration files with partial contents.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{EscrowError, Result};

/// Immutable client configuration.
///
/// Created once at client construction and reused for every call. The
/// versioned base path is derived from `api_base` and `api_version` exactly
/// once via [`ClientConfig::base_path`].
///
/// # Examples
///
/// ```
/// use escrow_client::ClientConfig;
///
/// let config: ClientConfig = toml::from_str(r#"
///     api_base = "https://api.escrow.com"
///     timeout_secs = 60
/// "#).unwrap();
/// assert_eq!(config.base_path(), "https://api.escrow.com/2017-09-01");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API host.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// API version used as the leading path segment of relative calls.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Request timeout in seconds, applied uniformly to every call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Default header overrides, merged last-write-wins over the built-in
    /// `Accept` and `Content-Type` JSON headers.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
            headers: HashMap::new(),
        }
    }
}

impl ClientConfig {
    /// Validates configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`EscrowError::Config`] if:
    /// - `api_base` does not parse as an http(s) URL
    /// - `api_version` is empty after trimming slashes
    /// - `timeout_secs` is outside 1-300
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(self.api_base.trim_end_matches('/'))
            .map_err(|e| EscrowError::Config(format!("invalid api_base '{}': {e}", self.api_base)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(EscrowError::Config(format!(
                "api_base must use http or https, got: {}",
                url.scheme()
            )));
        }
        if self.api_version.trim_matches('/').is_empty() {
            return Err(EscrowError::Config("api_version must not be empty".to_owned()));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(EscrowError::Config(
                "timeout_secs must be between 1 and 300".to_owned(),
            ));
        }
        Ok(())
    }

    /// Returns the API base with trailing slashes trimmed.
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }

    /// Returns the version segment with surrounding slashes trimmed.
    #[must_use]
    pub fn api_version(&self) -> &str {
        self.api_version.trim_matches('/')
    }

    /// Returns the versioned base path used for relative calls.
    #[must_use]
    pub fn base_path(&self) -> String {
        format!("{}/{}", self.api_base(), self.api_version())
    }

    /// Returns the request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_api_base() -> String {
    "https://api.escrow-sandbox.com".to_owned()
}

fn default_api_version() -> String {
    "2017-09-01".to_owned()
}

fn default_timeout_secs() -> u64 {
    30
}
