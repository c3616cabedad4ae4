//! Lazy reveal of feed cards
//!
//! Each rendered card is registered with a [`VisibilityObserver`], which
//! yields a stream of booleans: `true` once at least half of the card is in
//! the viewport, `false` once it drops below that. [`RevealAnimator`] turns
//! those booleans into presentation styling:
//!
//! - entering: opacity 1, horizontal offset 0
//! - leaving: opacity 0, horizontal offset -20
//!
//! Nothing here touches domain state. [`Viewport`] is an observer over a
//! vertical list of fixed-height rows, so the effect can be driven from a
//! scroll offset without a rendering surface.
//!
//! # Example
//!
//! ```
//! use tazza_khabar::reveal::{RevealAnimator, RevealStyle, Viewport};
//! use tazza_khabar::ArticleId;
//!
//! let ids = [ArticleId::from_u128(1), ArticleId::from_u128(2), ArticleId::from_u128(3)];
//! let mut viewport = Viewport::new(10, 20); // rows of 10, window of 20
//! let mut animator = RevealAnimator::new();
//! animator.subscribe(&mut viewport, &ids);
//!
//! assert_eq!(animator.style(0), RevealStyle::SHOWN);
//! assert_eq!(animator.style(2), RevealStyle::HIDDEN);
//!
//! viewport.scroll_to(10);
//! assert_eq!(animator.style(0), RevealStyle::HIDDEN);
//! assert_eq!(animator.style(2), RevealStyle::SHOWN);
//! ```

use tokio::sync::watch;
use tracing::trace;

use crate::article::ArticleId;

/// Fraction of a card that must be visible for it to count as in view
pub const REVEAL_THRESHOLD: f32 = 0.5;

/// Horizontal offset of a card that is out of view
pub const HIDDEN_OFFSET: i32 = -20;

/// Presentation styling for one card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    /// 0.0 (transparent) to 1.0 (opaque)
    pub opacity: f32,
    /// Horizontal offset in logical units
    pub offset_x: i32,
}

impl RevealStyle {
    /// Card in view
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        offset_x: 0,
    };

    /// Card out of view
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        offset_x: HIDDEN_OFFSET,
    };

    /// Style for a visibility state
    pub fn for_visibility(visible: bool) -> Self {
        if visible { Self::SHOWN } else { Self::HIDDEN }
    }
}

/// Capability that reports whether rendered nodes are in view
pub trait VisibilityObserver {
    /// Handle identifying a rendered node
    type Node;

    /// Start observing `node`; the receiver yields its visibility
    fn observe_visibility(&mut self, node: Self::Node) -> watch::Receiver<bool>;

    /// Stop observing every node
    fn disconnect(&mut self);
}

/// Observer for a vertical list of equally tall rows
///
/// Nodes are row indices. Row `i` spans `[i * row_height, (i + 1) * row_height)`
/// and the window spans `[scroll, scroll + height)`.
#[derive(Debug)]
pub struct Viewport {
    row_height: u32,
    height: u32,
    scroll: u32,
    observed: Vec<(usize, watch::Sender<bool>)>,
}

impl Viewport {
    /// Create a viewport scrolled to the top
    ///
    /// A zero `row_height` is treated as 1.
    pub fn new(row_height: u32, height: u32) -> Self {
        Self {
            row_height: row_height.max(1),
            height,
            scroll: 0,
            observed: Vec::new(),
        }
    }

    /// Current scroll offset
    pub fn scroll(&self) -> u32 {
        self.scroll
    }

    /// Fraction of row `index` inside the window, 0.0 to 1.0
    pub fn intersection_ratio(&self, index: usize) -> f32 {
        let top = index as u64 * self.row_height as u64;
        let bottom = top + self.row_height as u64;
        let view_top = self.scroll as u64;
        let view_bottom = view_top + self.height as u64;
        let overlap = bottom.min(view_bottom).saturating_sub(top.max(view_top));
        overlap as f32 / self.row_height as f32
    }

    fn is_visible(&self, index: usize) -> bool {
        self.intersection_ratio(index) >= REVEAL_THRESHOLD
    }

    /// Scroll to `offset` and publish visibility changes
    pub fn scroll_to(&mut self, offset: u32) {
        self.scroll = offset;
        self.publish();
    }

    /// Resize the window and publish visibility changes
    pub fn resize(&mut self, height: u32) {
        self.height = height;
        self.publish();
    }

    fn publish(&mut self) {
        let states: Vec<bool> = self
            .observed
            .iter()
            .map(|(index, _)| self.is_visible(*index))
            .collect();
        for ((index, tx), visible) in self.observed.iter().zip(states) {
            let changed = tx.send_if_modified(|current| {
                if *current == visible {
                    false
                } else {
                    *current = visible;
                    true
                }
            });
            if changed {
                trace!("Row {} visible={}", index, visible);
            }
        }
        self.observed.retain(|(_, tx)| !tx.is_closed());
    }
}

impl VisibilityObserver for Viewport {
    type Node = usize;

    fn observe_visibility(&mut self, node: usize) -> watch::Receiver<bool> {
        let (tx, rx) = watch::channel(self.is_visible(node));
        self.observed.push((node, tx));
        rx
    }

    fn disconnect(&mut self) {
        self.observed.clear();
    }
}

/// Per-card styling driven by visibility streams
///
/// Cards are addressed by render position, so two cards showing the same
/// article still animate independently.
#[derive(Debug, Default)]
pub struct RevealAnimator {
    cards: Vec<watch::Receiver<bool>>,
    ids: Vec<ArticleId>,
}

impl RevealAnimator {
    /// Create an animator with no cards
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rendered cards, replacing any previous subscription
    ///
    /// Call again whenever the article collection changes. `ids` are in render
    /// order; card `i` is observed as row `i`.
    pub fn subscribe<O>(&mut self, observer: &mut O, ids: &[ArticleId])
    where
        O: VisibilityObserver<Node = usize>,
    {
        observer.disconnect();
        self.cards = (0..ids.len())
            .map(|row| observer.observe_visibility(row))
            .collect();
        self.ids = ids.to_vec();
    }

    /// Current style for the card rendered at `row`; unknown rows are hidden
    pub fn style(&self, row: usize) -> RevealStyle {
        self.cards
            .get(row)
            .map(|rx| RevealStyle::for_visibility(*rx.borrow()))
            .unwrap_or(RevealStyle::HIDDEN)
    }

    /// Article shown at `row` in the current subscription
    pub fn article_at(&self, row: usize) -> Option<ArticleId> {
        self.ids.get(row).copied()
    }

    /// Number of observed cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether no cards are observed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_ratio() {
        let mut viewport = Viewport::new(10, 25);
        assert_eq!(viewport.intersection_ratio(0), 1.0);
        assert_eq!(viewport.intersection_ratio(2), 0.5);
        assert_eq!(viewport.intersection_ratio(3), 0.0);
        viewport.scroll_to(4);
        assert!((viewport.intersection_ratio(0) - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut viewport = Viewport::new(10, 25);
        let rx = viewport.observe_visibility(2);
        assert!(*rx.borrow());
    }

    #[test]
    fn test_styles() {
        assert_eq!(RevealStyle::for_visibility(true), RevealStyle { opacity: 1.0, offset_x: 0 });
        assert_eq!(RevealStyle::for_visibility(false), RevealStyle { opacity: 0.0, offset_x: -20 });
    }

    #[tokio::test]
    async fn test_stream_reports_changes() {
        let mut viewport = Viewport::new(10, 10);
        let mut rx = viewport.observe_visibility(1);
        assert!(!*rx.borrow_and_update());

        viewport.scroll_to(10);
        rx.changed().await.unwrap();
        assert!(*rx.borrow_and_update());

        // Scrolling within the same visibility does not notify
        viewport.scroll_to(12);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_disconnect_closes_streams() {
        let mut viewport = Viewport::new(10, 10);
        let rx = viewport.observe_visibility(0);
        viewport.disconnect();
        assert!(rx.has_changed().is_err());
    }

    #[test]
    fn test_resubscribe_on_new_collection() {
        let mut viewport = Viewport::new(10, 10);
        let mut animator = RevealAnimator::new();
        animator.subscribe(&mut viewport, &[ArticleId::from_u128(1), ArticleId::from_u128(2)]);
        assert_eq!(animator.len(), 2);

        animator.subscribe(&mut viewport, &[ArticleId::from_u128(2)]);
        assert_eq!(animator.len(), 1);
        assert_eq!(animator.article_at(0), Some(ArticleId::from_u128(2)));
        assert_eq!(animator.style(0), RevealStyle::SHOWN);
        assert_eq!(animator.style(1), RevealStyle::HIDDEN);
    }

    #[test]
    fn test_repeated_ids_animate_per_row() {
        let shared = ArticleId::from_key("https://removed.com");
        let ids = [shared, ArticleId::from_u128(9), shared];
        let mut viewport = Viewport::new(10, 10);
        let mut animator = RevealAnimator::new();
        animator.subscribe(&mut viewport, &ids);

        assert_eq!(animator.len(), 3);
        assert_eq!(animator.style(0), RevealStyle::SHOWN);
        assert_eq!(animator.style(2), RevealStyle::HIDDEN);

        viewport.scroll_to(20);
        assert_eq!(animator.style(0), RevealStyle::HIDDEN);
        assert_eq!(animator.style(2), RevealStyle::SHOWN);
    }

    #[test]
    fn test_dropped_receivers_pruned() {
        let mut viewport = Viewport::new(10, 10);
        drop(viewport.observe_visibility(0));
        viewport.scroll_to(5);
        assert!(viewport.observed.is_empty());
    }
}
