//! Client configuration.
//!
//! Layering: built-in defaults, then environment, then whatever the caller
//! (usually command-line flags) overrides explicitly.

use std::time::Duration;

use reqwest::Url;

use crate::error::{GalleryError, GalleryResult};

/// NASA Astronomy Picture of the Day endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/planetary/apod";

/// Rate-limited public key accepted by api.nasa.gov
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

pub const ENV_API_KEY: &str = "APOD_API_KEY";
pub const ENV_BASE_URL: &str = "APOD_BASE_URL";

#[derive(Clone, PartialEq, Eq)]
pub struct ApodConfig {
    pub base_url: String,
    pub api_key: String,
    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for ApodConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            timeout: None,
        }
    }
}

// The API key stays out of logs.
impl std::fmt::Debug for ApodConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApodConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ApodConfig {
    /// Defaults overridden by `APOD_API_KEY` / `APOD_BASE_URL`
    pub fn from_env() -> Self {
        Self::default().with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an environment-like lookup. Blank values are ignored.
    pub fn with_env_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(key) = non_blank(ENV_API_KEY) {
            self.api_key = key;
        }
        if let Some(url) = non_blank(ENV_BASE_URL) {
            self.base_url = url;
        }
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check the base URL is http(s) and the key is present
    pub fn validate(&self) -> GalleryResult<Url> {
        if self.api_key.trim().is_empty() {
            return Err(GalleryError::Config("API key must not be empty".to_string()));
        }
        let url = Url::parse(&self.base_url)
            .map_err(|e| GalleryError::Config(format!("invalid base URL {:?}: {}", self.base_url, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(GalleryError::Config(format!(
                "unsupported URL scheme {:?}",
                other
            ))),
        }
    }
}
