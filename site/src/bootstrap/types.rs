//! Types for the bootstrap feature.

use serde::{Deserialize, Serialize};

/// Lifecycle of the full-page loader overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoaderPhase {
    /// Covering the page while content settles
    Covering,
    /// Fade-out transition running
    Fading,
    /// Removed from the page
    Hidden,
}

/// State of the bootstrap feature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapState {
    /// Current loader overlay phase
    pub loader: LoaderPhase,
    /// Whether the prefetch pass has been kicked off
    pub prefetch_started: bool,
}

impl BootstrapState {
    /// Creates the initial bootstrap state (loader covering)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            loader: LoaderPhase::Covering,
            prefetch_started: false,
        }
    }
}

impl Default for BootstrapState {
    fn default() -> Self {
        Self::new()
    }
}

/// Actions processed by the bootstrap reducer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BootstrapAction {
    /// The page finished loading
    ///
    /// Starts the loader dwell timer and kicks off image prefetching.
    PageLoaded,

    /// Dwell elapsed; begin fading the loader out
    LoaderFadeStarted,

    /// Fade finished; remove the loader
    LoaderHidden,
}
