#![doc = include_str!("../README.md")]

/// Feed articles and the headlines wire format
pub mod article;
mod client;
mod config;
mod error;
/// Feed filtering by category and search term
pub mod filter;
/// Likes and bookmarks
pub mod interaction;
/// Notification switch and sound playback
pub mod notification;
mod reader;
/// Lazy reveal of feed cards
pub mod reveal;
/// Local login/signup session
pub mod session;
/// Article sharing
pub mod share;
mod store;

pub use article::{Article, ArticleBuilder, ArticleId, parse_headlines};
pub use client::{FeedSource, HeadlinesClient, StaticFeed};
pub use config::{
    DEFAULT_COUNTRY, DEFAULT_ENDPOINT, DEFAULT_SOUND, ENV_API_KEY, ENV_COUNTRY, ENV_ENDPOINT,
    FeedConfig,
};
pub use error::{KhabarError, Result};
pub use filter::{Category, FilterState, filter};
pub use interaction::{Interactions, Mark, ToggleSet, toggle};
pub use notification::{ENABLED_MESSAGE, NotificationState, SoundPlayer};
pub use reader::{Action, Card, Reader};
pub use reveal::{RevealAnimator, RevealStyle, Viewport, VisibilityObserver};
pub use session::{AuthMode, SessionState};
pub use share::{SharePayload, ShareTarget, share};
pub use store::{ArticleStore, LoadStatus};
