//! Feed articles
//!
//! Provides the article model and the headlines wire format.
//!
//! This module is organized into:
//! - `types`: Core article data structures (Article, ArticleId)
//! - `parsing`: Headlines payload decoding
//! - `builder`: ArticleBuilder for constructing articles outside a fetch

mod builder;
mod parsing;
mod types;

pub use self::builder::ArticleBuilder;
pub use self::parsing::{parse_headlines, parse_published_at};
pub use self::types::{Article, ArticleId};
