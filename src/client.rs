//! Headlines feed sources
//!
//! [`FeedSource`] is the seam the store loads through. [`HeadlinesClient`]
//! performs the single HTTP GET against the headlines endpoint; there is no
//! retry and no backoff. [`StaticFeed`] serves a fixed article list.

use std::future::Future;
use std::sync::Arc;

use reqwest::Client;
use tracing::debug;

use crate::article::{Article, parse_headlines};
use crate::config::FeedConfig;
use crate::error::{KhabarError, Result};

/// User agent sent with feed requests
const USER_AGENT: &str = concat!("tazza-khabar/", env!("CARGO_PKG_VERSION"));

/// Something that can produce the current feed
pub trait FeedSource {
    /// Fetch the whole feed, in display order
    fn fetch(&self) -> impl Future<Output = Result<Vec<Article>>>;
}

/// HTTP client for the headlines endpoint
///
/// # Example
///
/// ```no_run
/// use tazza_khabar::{FeedConfig, HeadlinesClient};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = FeedConfig::from_env()?;
/// let client = HeadlinesClient::new(Arc::new(config))?;
/// let articles = client.fetch_headlines().await?;
/// println!("{} headlines", articles.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HeadlinesClient {
    http: Client,
    config: Arc<FeedConfig>,
}

impl HeadlinesClient {
    /// Create a client for `config`
    ///
    /// # Errors
    ///
    /// - [`KhabarError::Config`] if the configuration is unusable
    /// - [`KhabarError::Http`] if the HTTP client cannot be built
    pub fn new(config: Arc<FeedConfig>) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Fetch the top headlines
    ///
    /// Sends `GET {endpoint}?country={country}&apiKey={key}` and decodes the
    /// body.
    ///
    /// # Errors
    ///
    /// - [`KhabarError::Http`] - connection, TLS or timeout failure
    /// - [`KhabarError::Api`] - the body reports `"status": "error"`
    /// - [`KhabarError::Status`] - non-success status without an API error body
    /// - [`KhabarError::Decode`] - body is not a headlines payload
    pub async fn fetch_headlines(&self) -> Result<Vec<Article>> {
        debug!(
            "Fetching headlines from {} (country={})",
            self.config.endpoint, self.config.country
        );

        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&[
                ("country", self.config.country.as_str()),
                ("apiKey", self.config.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // The API explains most failures in a JSON error body
            if let Err(err @ KhabarError::Api { .. }) = parse_headlines(&body) {
                return Err(err);
            }
            return Err(KhabarError::Status {
                code: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let articles = parse_headlines(&body)?;
        debug!("Fetched {} articles", articles.len());
        Ok(articles)
    }
}

impl FeedSource for HeadlinesClient {
    async fn fetch(&self) -> Result<Vec<Article>> {
        self.fetch_headlines().await
    }
}

/// Feed source that always returns the same articles
#[derive(Debug, Clone, Default)]
pub struct StaticFeed {
    articles: Vec<Article>,
}

impl StaticFeed {
    /// Serve `articles`
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }
}

impl FeedSource for StaticFeed {
    async fn fetch(&self) -> Result<Vec<Article>> {
        Ok(self.articles.clone())
    }
}
