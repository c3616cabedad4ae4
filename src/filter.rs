//! Feed filtering
//!
//! Maps (articles, category, search term) to the visible subset of the feed.
//! The result is a stable filter: relative order of the source collection is
//! preserved and nothing is ranked or sorted.
//!
//! # Example
//!
//! ```
//! use tazza_khabar::article::ArticleBuilder;
//! use tazza_khabar::filter::{filter, Category};
//!
//! let articles = vec![
//!     ArticleBuilder::new().title("Cats").content("purr").category("Pets").build(),
//!     ArticleBuilder::new().title("Dogs").content("bark").category("Pets").build(),
//! ];
//!
//! let visible = filter(&articles, &Category::All, "dog");
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].title, "Dogs");
//! ```

use std::fmt;

use crate::article::Article;

/// Label used for the unrestricted category
pub const ALL_LABEL: &str = "All";

/// Category selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// No category restriction
    #[default]
    All,
    /// Only articles whose category equals this name exactly
    Named(String),
}

impl Category {
    /// Parse a picker label; `"All"` is the unrestricted sentinel
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            Self::All
        } else {
            Self::Named(label.to_string())
        }
    }

    /// Whether an article passes the category half of the filter
    pub fn admits(&self, article: &Article) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => article.in_category(name),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_LABEL),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Search term and category as entered by the user
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterState {
    /// Case-insensitive substring matched against title and content
    pub search_term: String,
    /// Category restriction
    pub category: Category,
}

impl FilterState {
    /// Replace the search term
    #[must_use]
    pub fn with_search(self, term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..self
        }
    }

    /// Replace the category
    #[must_use]
    pub fn with_category(self, category: Category) -> Self {
        Self { category, ..self }
    }

    /// Apply this filter to a feed
    pub fn apply<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        filter(articles, &self.category, &self.search_term)
    }
}

/// Whether `term` matches the article's title or content, ignoring case
///
/// An empty term matches everything.
pub fn matches_term(article: &Article, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    article.title.to_lowercase().contains(&needle)
        || article.content.to_lowercase().contains(&needle)
}

/// Visible subset of `articles` for a category and search term
///
/// An article passes when the category admits it AND the term is a
/// case-insensitive substring of its title or content. Source order is kept.
pub fn filter<'a>(articles: &'a [Article], category: &Category, term: &str) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|article| category.admits(article) && matches_term(article, term))
        .collect()
}

/// Distinct categories present in the feed, in first-seen order
pub fn categories(articles: &[Article]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for name in articles.iter().filter_map(|a| a.category.as_deref()) {
        if !seen.iter().any(|s| s == name) {
            seen.push(name.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::{ArticleBuilder, ArticleId};

    fn pets() -> Vec<Article> {
        vec![
            ArticleBuilder::new()
                .id(ArticleId::from_u128(1))
                .title("Cats")
                .content("purr")
                .category("Pets")
                .build(),
            ArticleBuilder::new()
                .id(ArticleId::from_u128(2))
                .title("Dogs")
                .content("bark")
                .category("Pets")
                .build(),
        ]
    }

    fn mixed() -> Vec<Article> {
        vec![
            ArticleBuilder::new()
                .title("Election night")
                .content("Votes counted")
                .category("Politics")
                .build(),
            ArticleBuilder::new()
                .title("Cup final")
                .content("A late goal")
                .category("Sports")
                .build(),
            ArticleBuilder::new()
                .title("Budget")
                .content("Tax votes")
                .category("Politics")
                .build(),
            ArticleBuilder::new().title("Uncategorised").content("misc").build(),
        ]
    }

    #[test]
    fn test_scenario_dog() {
        let articles = pets();
        let visible = filter(&articles, &Category::All, "dog");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, ArticleId::from_u128(2));
    }

    #[test]
    fn test_all_empty_is_identity() {
        let articles = mixed();
        let visible = filter(&articles, &Category::All, "");
        assert_eq!(visible.len(), articles.len());
        for (v, a) in visible.iter().zip(articles.iter()) {
            assert_eq!(*v, a);
        }
    }

    #[test]
    fn test_case_insensitive() {
        let articles = pets();
        assert_eq!(filter(&articles, &Category::All, "PURR").len(), 1);
        assert_eq!(filter(&articles, &Category::All, "cAtS").len(), 1);
    }

    #[test]
    fn test_matches_content() {
        let articles = mixed();
        let visible = filter(&articles, &Category::All, "votes");
        let titles: Vec<_> = visible.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Election night", "Budget"]);
    }

    #[test]
    fn test_category_and_term() {
        let articles = mixed();
        let politics = Category::Named("Politics".to_string());
        assert_eq!(filter(&articles, &politics, "").len(), 2);
        assert_eq!(filter(&articles, &politics, "budget").len(), 1);
        assert!(filter(&articles, &politics, "goal").is_empty());
    }

    #[test]
    fn test_uncategorised_excluded_by_named() {
        let articles = mixed();
        let visible = filter(&articles, &Category::Named("misc".to_string()), "");
        assert!(visible.is_empty());
    }

    #[test]
    fn test_category_exact_match() {
        let articles = pets();
        assert!(filter(&articles, &Category::Named("pets".to_string()), "").is_empty());
    }

    #[test]
    fn test_subset_preserves_order() {
        let articles = mixed();
        for term in ["", "o", "e", "tax", "zzz"] {
            let visible = filter(&articles, &Category::All, term);
            let mut cursor = 0;
            for v in visible {
                let pos = articles[cursor..]
                    .iter()
                    .position(|a| a == v)
                    .expect("visible article must come from the source in order");
                cursor += pos + 1;
            }
        }
    }

    #[test]
    fn test_matches_term_agrees_with_filter() {
        let articles = mixed();
        for a in &articles {
            assert_eq!(
                matches_term(a, "Vote"),
                !filter(std::slice::from_ref(a), &Category::All, "Vote").is_empty()
            );
        }
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::from_label("All"), Category::All);
        assert_eq!(Category::from_label("Pets"), Category::Named("Pets".to_string()));
        assert_eq!(Category::All.to_string(), "All");
    }

    #[test]
    fn test_categories_first_seen() {
        assert_eq!(categories(&mixed()), vec!["Politics", "Sports"]);
    }

    #[test]
    fn test_filter_state() {
        let articles = pets();
        let state = FilterState::default().with_search("a");
        assert_eq!(state.apply(&articles).len(), 2);
        let state = state.with_category(Category::Named("Birds".to_string()));
        assert!(state.apply(&articles).is_empty());
    }
}
