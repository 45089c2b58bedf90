//! Types for the page chrome feature.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// State the shell binds to the page chrome
///
/// Scroll-derived fields are plain projections of the last reported scroll
/// position; `revealed` is the only accumulating memory (reveal animations
/// run once per element and never re-hide).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChromeState {
    /// Whether the mobile navigation menu is open
    pub menu_open: bool,
    /// Last reported scroll position
    pub scroll_y: u64,
    /// Header gets its condensed treatment past the scroll threshold
    pub header_condensed: bool,
    /// Back-to-top control visibility past its scroll threshold
    pub back_to_top_visible: bool,
    /// Parallax offset for the hero media (half the scroll position)
    pub hero_parallax: u64,
    revealed: HashSet<String>,
}

impl ChromeState {
    /// Creates the initial chrome state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an element's reveal animation has already run
    #[must_use]
    pub fn is_revealed(&self, element: &str) -> bool {
        self.revealed.contains(element)
    }

    /// Marks an element revealed; returns false if it already was
    pub(crate) fn mark_revealed(&mut self, element: String) -> bool {
        self.revealed.insert(element)
    }

    /// Number of elements revealed so far
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

/// Actions processed by the chrome reducer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ChromeAction {
    /// Toggle the mobile navigation menu
    ToggleMenu,

    /// The page scrolled to a new position
    ///
    /// Delivered debounced (trailing edge) by the shell; intermediate
    /// positions within a burst are dropped by design.
    ScrollChanged {
        /// New vertical scroll position
        y: u64,
    },

    /// A navigation or hero link to an in-page anchor was activated
    AnchorClicked {
        /// Target anchor name (without the `#`)
        anchor: String,
    },

    /// The back-to-top control was activated
    BackToTop,

    /// An observed element entered the viewport
    ElementSeen {
        /// Name of the element that became visible
        element: String,
    },
}
