//! Headlines payload parsing
//!
//! Decodes the JSON body returned by the headlines endpoint into
//! [`Article`] values. Expected shape:
//!
//! ```json
//! { "status": "ok", "totalResults": 2, "articles": [ { "title": "...", "content": "..." } ] }
//! ```
//!
//! Error bodies (`"status": "error"`) carry a `code` and `message`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{KhabarError, Result};

use super::builder::derive_key;
use super::types::{Article, ArticleId};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HeadlinesResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Option<Vec<WireArticle>>,
}

#[derive(Debug, Deserialize)]
struct WireSource {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    source: Option<WireSource>,
    #[serde(default)]
    url_to_image: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
}

impl WireArticle {
    fn into_article(self, seen: &mut HashMap<String, usize>) -> Article {
        let title = self.title.unwrap_or_default();
        let published_at = self.published_at.as_deref().and_then(parse_published_at);
        let key = derive_key(self.url.as_deref(), &title, published_at.as_ref());

        // Repeats of a key (e.g. removed stories sharing one url) get the
        // occurrence number appended so ids stay unique within the feed
        let occurrence = seen.entry(key.clone()).or_insert(0);
        let id = match *occurrence {
            0 => ArticleId::from_key(&key),
            n => ArticleId::from_key(&format!("{}#{}", key, n)),
        };
        *occurrence += 1;

        Article {
            id,
            title,
            content: self.content.unwrap_or_default(),
            category: non_empty(self.category),
            description: non_empty(self.description),
            url: non_empty(self.url),
            author: non_empty(self.author),
            source: self.source.and_then(|s| non_empty(s.name)),
            image_url: non_empty(self.url_to_image),
            published_at,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parse an RFC 3339 `publishedAt` value
///
/// Unparseable timestamps are dropped rather than failing the whole feed.
pub fn parse_published_at(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Parse a headlines response body into articles
///
/// Article order is preserved. Missing or null `title`/`content` decode as
/// empty strings; every other field is optional. Ids are unique within the
/// result even when several articles share a url.
///
/// # Errors
///
/// - [`KhabarError::Decode`] if the body is not JSON of the expected shape
/// - [`KhabarError::Api`] if the body reports `"status": "error"`
///
/// # Examples
///
/// ```
/// use tazza_khabar::article::parse_headlines;
///
/// let body = r#"{"status":"ok","articles":[{"title":"Cats","content":"purr","category":"Pets"}]}"#;
/// let articles = parse_headlines(body).unwrap();
/// assert_eq!(articles.len(), 1);
/// assert_eq!(articles[0].title, "Cats");
/// ```
pub fn parse_headlines(body: &str) -> Result<Vec<Article>> {
    let response: HeadlinesResponse = serde_json::from_str(body)?;

    if response.status.as_deref() == Some("error") {
        return Err(KhabarError::Api {
            code: response.code.unwrap_or_else(|| "unknown".to_string()),
            message: response.message.unwrap_or_default(),
        });
    }

    let mut seen = HashMap::new();
    Ok(response
        .articles
        .unwrap_or_default()
        .into_iter()
        .map(|wire| wire.into_article(&mut seen))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_article() {
        let body = r#"{
            "status": "ok",
            "totalResults": 1,
            "articles": [{
                "source": {"id": null, "name": "The Daily"},
                "author": "A. Writer",
                "title": "Rust 2.0 announced",
                "description": "Big news",
                "url": "https://example.com/rust",
                "urlToImage": "https://example.com/rust.png",
                "publishedAt": "2024-06-01T12:30:00Z",
                "content": "Lorem ipsum [+123 chars]"
            }]
        }"#;
        let articles = parse_headlines(body).unwrap();
        assert_eq!(articles.len(), 1);
        let a = &articles[0];
        assert_eq!(a.title, "Rust 2.0 announced");
        assert_eq!(a.source.as_deref(), Some("The Daily"));
        assert_eq!(a.author.as_deref(), Some("A. Writer"));
        assert_eq!(a.image_url.as_deref(), Some("https://example.com/rust.png"));
        assert_eq!(a.published_at.unwrap().to_rfc3339(), "2024-06-01T12:30:00+00:00");
        assert!(a.category.is_none());
    }

    #[test]
    fn test_null_content_is_empty() {
        let body = r#"{"status":"ok","articles":[{"title":"T","content":null}]}"#;
        let articles = parse_headlines(body).unwrap();
        assert_eq!(articles[0].content, "");
    }

    #[test]
    fn test_missing_articles_is_empty_feed() {
        let articles = parse_headlines(r#"{"status":"ok","totalResults":0}"#).unwrap();
        assert!(articles.is_empty());
    }

    #[test]
    fn test_error_status() {
        let body = r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid"}"#;
        match parse_headlines(body) {
            Err(KhabarError::Api { code, message }) => {
                assert_eq!(code, "apiKeyInvalid");
                assert_eq!(message, "Your API key is invalid");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(
            parse_headlines("<html>oops</html>"),
            Err(KhabarError::Decode(_))
        ));
    }

    #[test]
    fn test_order_preserved() {
        let body = r#"{"articles":[{"title":"1"},{"title":"2"},{"title":"3"}]}"#;
        let titles: Vec<_> = parse_headlines(body)
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_shared_url_gets_distinct_ids() {
        let body = r#"{"status":"ok","articles":[
            {"title":"[Removed]","url":"https://removed.com"},
            {"title":"Real story","url":"https://example.com/real"},
            {"title":"[Removed]","url":"https://removed.com"},
            {"title":"[Removed]","url":"https://removed.com"}
        ]}"#;
        let articles = parse_headlines(body).unwrap();
        let ids: std::collections::HashSet<_> = articles.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), 4);

        // First occurrence keeps the plain url id, and repeats are stable across parses
        assert_eq!(articles[0].id, ArticleId::from_key("https://removed.com"));
        let again = parse_headlines(body).unwrap();
        assert_eq!(again[2].id, articles[2].id);
        assert_eq!(again[3].id, articles[3].id);
    }

    #[test]
    fn test_bad_timestamp_dropped() {
        assert!(parse_published_at("yesterday").is_none());
        assert!(parse_published_at("2024-01-01T00:00:00+05:30").is_some());
    }
}
