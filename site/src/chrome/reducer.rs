//! Reducer for the page chrome feature.

use crate::chrome::types::{ChromeAction, ChromeState};
use crate::chrome::viewport::Viewport;
use crate::config::ScrollConfig;
use stagepass_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use std::sync::Arc;

/// Environment dependencies for the chrome reducer
#[derive(Clone)]
pub struct ChromeEnvironment {
    /// The page the chrome drives
    pub viewport: Arc<dyn Viewport>,
    /// Scroll thresholds
    pub scroll: ScrollConfig,
}

impl ChromeEnvironment {
    /// Creates a new `ChromeEnvironment`
    #[must_use]
    pub fn new(viewport: Arc<dyn Viewport>, scroll: ScrollConfig) -> Self {
        Self { viewport, scroll }
    }
}

/// Reducer for the page chrome
#[derive(Clone, Debug)]
pub struct ChromeReducer;

impl ChromeReducer {
    /// Creates a new `ChromeReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ChromeReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for ChromeReducer {
    type State = ChromeState;
    type Action = ChromeAction;
    type Environment = ChromeEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            ChromeAction::ToggleMenu => {
                state.menu_open = !state.menu_open;
                smallvec![Effect::None]
            },

            ChromeAction::ScrollChanged { y } => {
                state.scroll_y = y;
                state.header_condensed = y > env.scroll.header_threshold;
                state.back_to_top_visible = y > env.scroll.back_to_top_threshold;
                state.hero_parallax = y / 2;
                smallvec![Effect::None]
            },

            ChromeAction::AnchorClicked { anchor } => {
                let Some(offset) = env.viewport.offset_of(&anchor) else {
                    tracing::debug!(%anchor, "Anchor not found, ignoring");
                    return smallvec![Effect::None];
                };

                // Land the section just below the fixed header
                let target = offset.saturating_sub(env.viewport.header_height());
                state.menu_open = false;

                let viewport = Arc::clone(&env.viewport);
                smallvec![Effect::Future(Box::pin(async move {
                    viewport.scroll_to(target);
                    None
                }))]
            },

            ChromeAction::BackToTop => {
                let viewport = Arc::clone(&env.viewport);
                smallvec![Effect::Future(Box::pin(async move {
                    viewport.scroll_to(0);
                    None
                }))]
            },

            ChromeAction::ElementSeen { element } => {
                if !state.mark_revealed(element.clone()) {
                    // Reveal runs once per element; later sightings are no-ops
                    return smallvec![Effect::None];
                }

                let viewport = Arc::clone(&env.viewport);
                smallvec![Effect::Future(Box::pin(async move {
                    viewport.reveal(&element);
                    None
                }))]
            },
        }
    }
}
