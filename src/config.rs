//! Headlines feed configuration

use crate::error::{KhabarError, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Default headlines endpoint
pub const DEFAULT_ENDPOINT: &str = "https://newsapi.org/v2/top-headlines";

/// Default country code for top headlines
pub const DEFAULT_COUNTRY: &str = "us";

/// Default notification sound asset
pub const DEFAULT_SOUND: &str = "notification.mp3";

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "NEWSAPI_KEY";

/// Environment variable overriding the country code
pub const ENV_COUNTRY: &str = "NEWSAPI_COUNTRY";

/// Environment variable overriding the endpoint
pub const ENV_ENDPOINT: &str = "NEWSAPI_ENDPOINT";

/// Headlines feed configuration
///
/// Contains everything needed to fetch the feed and to drive the reader's
/// side effects (notification sound, share fallback url). The API key is
/// never compiled in; supply it explicitly or through `NEWSAPI_KEY`.
///
/// # Example
///
/// ```
/// use tazza_khabar::FeedConfig;
///
/// let config = FeedConfig::new("my-key").with_country("in");
/// assert_eq!(config.country, "in");
/// assert_eq!(config.endpoint, "https://newsapi.org/v2/top-headlines");
/// ```
#[must_use]
#[derive(Clone)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedConfig {
    /// Headlines endpoint (e.g., "https://newsapi.org/v2/top-headlines")
    #[cfg_attr(feature = "serialize", serde(default = "default_endpoint"))]
    pub endpoint: String,

    /// Two-letter country code passed as the `country` query parameter
    #[cfg_attr(feature = "serialize", serde(default = "default_country"))]
    pub country: String,

    /// API key passed as the `apiKey` query parameter
    pub api_key: String,

    /// Sound played when notifications are enabled
    #[cfg_attr(feature = "serialize", serde(default = "default_sound"))]
    pub notification_sound: PathBuf,

    /// Url shared for articles that carry none of their own
    #[cfg_attr(feature = "serialize", serde(default))]
    pub reader_url: Option<String>,

    /// Request timeout for the feed fetch
    ///
    /// Default: `None` (wait for the endpoint indefinitely)
    #[cfg_attr(feature = "serialize", serde(default))]
    pub request_timeout: Option<Duration>,
}

#[cfg(feature = "serialize")]
fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

#[cfg(feature = "serialize")]
fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

#[cfg(feature = "serialize")]
fn default_sound() -> PathBuf {
    PathBuf::from(DEFAULT_SOUND)
}

impl std::fmt::Debug for FeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedConfig")
            .field("endpoint", &self.endpoint)
            .field("country", &self.country)
            .field("api_key", &"<redacted>")
            .field("notification_sound", &self.notification_sound)
            .field("reader_url", &self.reader_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl FeedConfig {
    /// Create a configuration for the default endpoint and country
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            api_key: api_key.into(),
            notification_sound: PathBuf::from(DEFAULT_SOUND),
            reader_url: None,
            request_timeout: None,
        }
    }

    /// Build a configuration from the environment
    ///
    /// Reads `NEWSAPI_KEY` (required), `NEWSAPI_COUNTRY` and
    /// `NEWSAPI_ENDPOINT` (optional).
    ///
    /// # Errors
    ///
    /// Returns [`KhabarError::Config`] if `NEWSAPI_KEY` is unset or empty.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(ENV_API_KEY)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| KhabarError::Config(format!("{} not set", ENV_API_KEY)))?;

        let mut config = Self::new(api_key);
        if let Ok(country) = std::env::var(ENV_COUNTRY) {
            config.country = country;
        }
        if let Ok(endpoint) = std::env::var(ENV_ENDPOINT) {
            config.endpoint = endpoint;
        }
        Ok(config)
    }

    /// Override the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the country code
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Override the notification sound asset
    pub fn with_notification_sound(mut self, path: impl Into<PathBuf>) -> Self {
        self.notification_sound = path.into();
        self
    }

    /// Set the fallback url used when sharing
    pub fn with_reader_url(mut self, url: impl Into<String>) -> Self {
        self.reader_url = Some(url.into());
        self
    }

    /// Set a request timeout for the feed fetch
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Check that the configuration can be used for a fetch
    ///
    /// # Errors
    ///
    /// Returns [`KhabarError::Config`] if the key or endpoint is empty, or the
    /// endpoint is not an http(s) url.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(KhabarError::Config("API key is empty".to_string()));
        }
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(KhabarError::Config(format!(
                "endpoint must be an http(s) url: {}",
                self.endpoint
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let config = FeedConfig::new("key");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.country, "us");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.notification_sound, PathBuf::from("notification.mp3"));
        assert!(config.reader_url.is_none());
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_builders() {
        let config = FeedConfig::new("key")
            .with_endpoint("http://localhost:8080/v2/top-headlines")
            .with_country("in")
            .with_notification_sound("assets/ding.wav")
            .with_reader_url("https://khabar.example/")
            .with_request_timeout(Duration::from_secs(5));
        assert_eq!(config.endpoint, "http://localhost:8080/v2/top-headlines");
        assert_eq!(config.country, "in");
        assert_eq!(config.notification_sound, PathBuf::from("assets/ding.wav"));
        assert_eq!(config.reader_url.as_deref(), Some("https://khabar.example/"));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_validate() {
        assert!(FeedConfig::new("key").validate().is_ok());
        assert!(FeedConfig::new("  ").validate().is_err());
        assert!(FeedConfig::new("key").with_endpoint("ftp://x").validate().is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", FeedConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
