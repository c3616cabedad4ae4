//! Article type definitions
//!
//! This module contains the core data structures for representing feed articles.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Stable article identifier
///
/// The headlines API does not number its articles, so ids are derived from
/// the article's url (name-based UUIDv5). The same story keeps the same id
/// across refreshes, which keeps liked and bookmarked sets meaningful after
/// the feed is replaced.
///
/// # Examples
///
/// ```
/// use tazza_khabar::ArticleId;
///
/// let a = ArticleId::from_key("https://example.com/story");
/// let b = ArticleId::from_key("https://example.com/story");
/// assert_eq!(a, b);
/// assert_ne!(a, ArticleId::from_u128(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct ArticleId(Uuid);

impl ArticleId {
    /// Derive an id from a stable key (usually the article url)
    pub fn from_key(key: &str) -> Self {
        Self(Uuid::new_v5(&Uuid::NAMESPACE_URL, key.as_bytes()))
    }

    /// Build an id from a raw 128-bit value (fixtures, external ids)
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// Underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ArticleId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form is enough to tell cards apart in a terminal
        let simple = self.0.simple().to_string();
        f.write_str(&simple[..8])
    }
}

/// A single news item from the headlines feed
///
/// Immutable once fetched: the feed is replaced wholesale on every load and
/// articles are never edited in place.
///
/// # Examples
///
/// ```
/// use tazza_khabar::article::ArticleBuilder;
///
/// let article = ArticleBuilder::new()
///     .title("Cats")
///     .content("purr")
///     .category("Pets")
///     .build();
///
/// assert_eq!(article.title, "Cats");
/// assert_eq!(article.category.as_deref(), Some("Pets"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Article {
    /// Stable identifier
    pub id: ArticleId,
    /// Headline
    pub title: String,
    /// Article text (the API truncates this to a snippet)
    pub content: String,
    /// Category, when the feed provides one
    pub category: Option<String>,
    /// Short summary
    pub description: Option<String>,
    /// Canonical url of the story
    pub url: Option<String>,
    /// Byline
    pub author: Option<String>,
    /// Publishing outlet name
    pub source: Option<String>,
    /// Lead image url
    pub image_url: Option<String>,
    /// Publication time
    pub published_at: Option<DateTime<Utc>>,
}

impl Article {
    /// Whether the article belongs to the named category
    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }
}
