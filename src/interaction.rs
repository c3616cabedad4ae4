//! Per-article toggle state (likes and bookmarks)

use std::collections::HashSet;

use crate::article::ArticleId;

/// Set of article ids carrying a binary per-article flag
///
/// Membership has no ordering significance. The only mutation is
/// [`toggle`](Self::toggle), the symmetric difference with a singleton.
///
/// # Example
///
/// ```
/// use tazza_khabar::{ArticleId, ToggleSet};
///
/// let liked = ToggleSet::new().toggle(ArticleId::from_u128(5));
/// assert!(liked.contains(ArticleId::from_u128(5)));
///
/// let liked = liked.toggle(ArticleId::from_u128(5));
/// assert!(liked.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct ToggleSet {
    ids: HashSet<ArticleId>,
}

impl ToggleSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `id` if present, otherwise add it
    #[must_use]
    pub fn toggle(mut self, id: ArticleId) -> Self {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
        self
    }

    /// Whether `id` is in the set
    pub fn contains(&self, id: ArticleId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of ids in the set
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over the ids in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &ArticleId> {
        self.ids.iter()
    }
}

impl FromIterator<ArticleId> for ToggleSet {
    fn from_iter<I: IntoIterator<Item = ArticleId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Toggle `id` in `set`, returning the new set
pub fn toggle(set: ToggleSet, id: ArticleId) -> ToggleSet {
    set.toggle(id)
}

/// Which per-article flag an action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Heart
    Like,
    /// Bookmark
    Bookmark,
}

/// Liked and bookmarked sets
///
/// The two sets are independent: an id may be in both, either, or neither.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Interactions {
    /// Liked articles
    pub liked: ToggleSet,
    /// Bookmarked articles
    pub bookmarked: ToggleSet,
}

impl Interactions {
    /// Toggle one flag for one article
    #[must_use]
    pub fn toggle(self, mark: Mark, id: ArticleId) -> Self {
        match mark {
            Mark::Like => Self {
                liked: self.liked.toggle(id),
                ..self
            },
            Mark::Bookmark => Self {
                bookmarked: self.bookmarked.toggle(id),
                ..self
            },
        }
    }

    /// Whether the article is liked
    pub fn is_liked(&self, id: ArticleId) -> bool {
        self.liked.contains(id)
    }

    /// Whether the article is bookmarked
    pub fn is_bookmarked(&self, id: ArticleId) -> bool {
        self.bookmarked.contains(id)
    }
}
