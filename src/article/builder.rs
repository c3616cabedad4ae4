//! Article builder
//!
//! Constructs [`Article`] values outside of feed decoding (demos, tests,
//! fixtures). The id is derived the same way the decoder derives it unless
//! one is set explicitly.

use chrono::{DateTime, Utc};

use super::types::{Article, ArticleId};

/// Builder for [`Article`]
///
/// # Example
///
/// ```
/// use tazza_khabar::article::ArticleBuilder;
/// use tazza_khabar::ArticleId;
///
/// let article = ArticleBuilder::new()
///     .id(ArticleId::from_u128(2))
///     .title("Dogs")
///     .content("bark")
///     .category("Pets")
///     .build();
///
/// assert_eq!(article.id, ArticleId::from_u128(2));
/// ```
#[derive(Debug, Default, Clone)]
#[must_use]
pub struct ArticleBuilder {
    id: Option<ArticleId>,
    title: String,
    content: String,
    category: Option<String>,
    description: Option<String>,
    url: Option<String>,
    author: Option<String>,
    source: Option<String>,
    image_url: Option<String>,
    published_at: Option<DateTime<Utc>>,
}

impl ArticleBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit id
    pub fn id(mut self, id: ArticleId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the headline
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the article text
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the summary
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the story url
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the byline
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the outlet name
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the lead image url
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Set the publication time
    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    /// Build the article
    pub fn build(self) -> Article {
        let id = self.id.unwrap_or_else(|| {
            derive_id(self.url.as_deref(), &self.title, self.published_at.as_ref())
        });
        Article {
            id,
            title: self.title,
            content: self.content,
            category: self.category,
            description: self.description,
            url: self.url,
            author: self.author,
            source: self.source,
            image_url: self.image_url,
            published_at: self.published_at,
        }
    }
}

/// Derive an article id from its url, or from title and publication time
pub(crate) fn derive_id(
    url: Option<&str>,
    title: &str,
    published_at: Option<&DateTime<Utc>>,
) -> ArticleId {
    ArticleId::from_key(&derive_key(url, title, published_at))
}

/// Identity key an article id is derived from
pub(crate) fn derive_key(
    url: Option<&str>,
    title: &str,
    published_at: Option<&DateTime<Utc>>,
) -> String {
    match url.filter(|u| !u.is_empty()) {
        Some(url) => url.to_string(),
        None => {
            let stamp = published_at.map(|t| t.to_rfc3339()).unwrap_or_default();
            format!("{}\n{}", title, stamp)
        }
    }
}
