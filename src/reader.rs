//! Reader state
//!
//! [`Reader`] gathers everything the news page keeps in memory: the feed,
//! the search/category filter, likes and bookmarks, the login session and
//! the notification switch. Synchronous transitions are [`Action`]s applied
//! by [`Reader::apply`]; the feed fetch is the one suspending operation
//! ([`Reader::refresh`]).
//!
//! # Example
//!
//! ```
//! use tazza_khabar::article::ArticleBuilder;
//! use tazza_khabar::notification::Silent;
//! use tazza_khabar::{Action, Reader, StaticFeed};
//!
//! # async fn example() -> tazza_khabar::Result<()> {
//! let feed = StaticFeed::new(vec![
//!     ArticleBuilder::new().title("Cats").content("purr").build(),
//!     ArticleBuilder::new().title("Dogs").content("bark").build(),
//! ]);
//!
//! let mut reader = Reader::default();
//! reader.refresh(&feed).await?;
//!
//! let reader = reader.apply(Action::Search("dog".into()), &mut Silent);
//! assert_eq!(reader.visible().len(), 1);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::PathBuf;

use tracing::debug;

use crate::article::{Article, ArticleId};
use crate::client::FeedSource;
use crate::config::{DEFAULT_SOUND, FeedConfig};
use crate::error::{KhabarError, Result};
use crate::filter::{self, Category, FilterState};
use crate::interaction::{Interactions, Mark};
use crate::notification::{NotificationState, SoundPlayer};
use crate::session::{AuthMode, SessionState};
use crate::share::{self, ShareTarget};
use crate::store::ArticleStore;

/// A synchronous user interaction
#[derive(Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the search term
    Search(String),
    /// Select a category
    SelectCategory(Category),
    /// Toggle the heart on an article
    ToggleLike(ArticleId),
    /// Toggle the bookmark on an article
    ToggleBookmark(ArticleId),
    /// Edit the username field
    SetUsername(String),
    /// Edit the password field
    SetPassword(String),
    /// Submit the login or signup form
    Submit(AuthMode),
    /// Log out
    Logout,
    /// Flip the notification switch
    ToggleNotifications,
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search(term) => f.debug_tuple("Search").field(term).finish(),
            Self::SelectCategory(category) => {
                f.debug_tuple("SelectCategory").field(category).finish()
            }
            Self::ToggleLike(id) => f.debug_tuple("ToggleLike").field(id).finish(),
            Self::ToggleBookmark(id) => f.debug_tuple("ToggleBookmark").field(id).finish(),
            Self::SetUsername(name) => f.debug_tuple("SetUsername").field(name).finish(),
            Self::SetPassword(_) => f.debug_tuple("SetPassword").field(&"<redacted>").finish(),
            Self::Submit(mode) => f.debug_tuple("Submit").field(mode).finish(),
            Self::Logout => f.write_str("Logout"),
            Self::ToggleNotifications => f.write_str("ToggleNotifications"),
        }
    }
}

/// A feed card ready for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card<'a> {
    /// The article
    pub article: &'a Article,
    /// Heart is filled
    pub liked: bool,
    /// Bookmark is filled
    pub bookmarked: bool,
}

/// In-memory state of the news page
#[derive(Debug, Clone)]
pub struct Reader {
    store: ArticleStore,
    filter: FilterState,
    interactions: Interactions,
    session: SessionState,
    notifications: NotificationState,
    notification_sound: PathBuf,
    reader_url: Option<String>,
}

impl Default for Reader {
    fn default() -> Self {
        Self {
            store: ArticleStore::new(),
            filter: FilterState::default(),
            interactions: Interactions::default(),
            session: SessionState::default(),
            notifications: NotificationState::default(),
            notification_sound: PathBuf::from(DEFAULT_SOUND),
            reader_url: None,
        }
    }
}

impl Reader {
    /// Create a reader using the side-effect settings of `config`
    pub fn new(config: &FeedConfig) -> Self {
        Self {
            notification_sound: config.notification_sound.clone(),
            reader_url: config.reader_url.clone(),
            ..Self::default()
        }
    }

    /// Apply one interaction
    ///
    /// `player` is only used when notifications are switched on.
    #[must_use]
    pub fn apply(self, action: Action, player: &mut dyn SoundPlayer) -> Self {
        debug!("Applying {:?}", action);
        match action {
            Action::Search(term) => Self {
                filter: self.filter.with_search(term),
                ..self
            },
            Action::SelectCategory(category) => Self {
                filter: self.filter.with_category(category),
                ..self
            },
            Action::ToggleLike(id) => Self {
                interactions: self.interactions.toggle(Mark::Like, id),
                ..self
            },
            Action::ToggleBookmark(id) => Self {
                interactions: self.interactions.toggle(Mark::Bookmark, id),
                ..self
            },
            Action::SetUsername(username) => Self {
                session: self.session.with_username(username),
                ..self
            },
            Action::SetPassword(password) => Self {
                session: self.session.with_password(password),
                ..self
            },
            Action::Submit(mode) => Self {
                session: self.session.submit(mode),
                ..self
            },
            Action::Logout => Self {
                session: self.session.logout(),
                ..self
            },
            Action::ToggleNotifications => {
                let notifications = self
                    .notifications
                    .toggle(player, &self.notification_sound);
                Self {
                    notifications,
                    ..self
                }
            }
        }
    }

    /// Load the feed from `source`, returning the number of articles
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the previous feed is kept and the failure is
    /// recorded in [`store`](Self::store).
    pub async fn refresh<S: FeedSource>(&mut self, source: &S) -> Result<usize> {
        self.store.load(source).await.map(<[Article]>::len)
    }

    /// Articles passing the current filter, in feed order
    pub fn visible(&self) -> Vec<&Article> {
        self.filter.apply(self.store.articles())
    }

    /// Visible articles with their like/bookmark state
    pub fn cards(&self) -> Vec<Card<'_>> {
        self.visible()
            .into_iter()
            .map(|article| Card {
                article,
                liked: self.interactions.is_liked(article.id),
                bookmarked: self.interactions.is_bookmarked(article.id),
            })
            .collect()
    }

    /// Categories present in the feed, for a picker
    pub fn categories(&self) -> Vec<String> {
        filter::categories(self.store.articles())
    }

    /// Look up an article in the current feed
    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.store.articles().iter().find(|a| a.id == id)
    }

    /// Share an article through the host capability
    ///
    /// # Errors
    ///
    /// - [`KhabarError::NoSuchArticle`] if `id` is not in the feed
    /// - [`KhabarError::ShareUnsupported`] if `target` is `None`
    pub fn share(&self, id: ArticleId, target: Option<&mut dyn ShareTarget>) -> Result<()> {
        let article = self
            .article(id)
            .ok_or_else(|| KhabarError::NoSuchArticle(id.to_string()))?;
        share::share(article, target, self.reader_url.as_deref())
    }

    /// Feed storage and load status
    pub fn store(&self) -> &ArticleStore {
        &self.store
    }

    /// Current filter
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Likes and bookmarks
    pub fn interactions(&self) -> &Interactions {
        &self.interactions
    }

    /// Login session
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Notification switch
    pub fn notifications(&self) -> &NotificationState {
        &self.notifications
    }
}
