//! Article store
//!
//! Holds the feed obtained from the last successful load. A load replaces the
//! collection wholesale; a failed load keeps the previous collection (empty at
//! startup) and records the failure so callers can tell "no articles" apart
//! from "fetch failed".

use tracing::{debug, error};

use crate::article::Article;
use crate::client::FeedSource;
use crate::error::Result;

/// Outcome of the most recent load
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// A load is pending (initial state)
    #[default]
    Loading,
    /// The last load succeeded
    Loaded,
    /// The last load failed; carries the error message
    Failed(String),
}

/// Feed storage
///
/// # Example
///
/// ```
/// use tazza_khabar::{ArticleStore, LoadStatus, StaticFeed};
/// use tazza_khabar::article::ArticleBuilder;
///
/// # async fn example() -> tazza_khabar::Result<()> {
/// let feed = StaticFeed::new(vec![ArticleBuilder::new().title("A").build()]);
/// let mut store = ArticleStore::new();
/// assert!(store.is_loading());
///
/// store.load(&feed).await?;
/// assert_eq!(store.status(), &LoadStatus::Loaded);
/// assert_eq!(store.articles().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArticleStore {
    articles: Vec<Article>,
    status: LoadStatus,
}

impl ArticleStore {
    /// Create an empty store in the loading state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current feed in display order
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Outcome of the most recent load
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Whether a load is pending
    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    /// Error message of the last load, if it failed
    pub fn last_error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Replace the whole collection
    pub fn replace(&mut self, articles: Vec<Article>) {
        debug!("Replacing {} articles with {}", self.articles.len(), articles.len());
        self.articles = articles;
        self.status = LoadStatus::Loaded;
    }

    /// Mark a load as pending
    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Load the feed from `source`
    ///
    /// On success the collection is replaced. On failure the previous
    /// collection is kept, the error is logged and recorded, and returned.
    /// Either way the store leaves the loading state.
    ///
    /// # Errors
    ///
    /// Returns whatever `source` fails with.
    pub async fn load<S: FeedSource>(&mut self, source: &S) -> Result<&[Article]> {
        self.begin_load();
        match source.fetch().await {
            Ok(articles) => {
                self.replace(articles);
                Ok(&self.articles)
            }
            Err(e) => {
                error!("Error fetching news: {}", e);
                self.status = LoadStatus::Failed(e.to_string());
                Err(e)
            }
        }
    }
}
