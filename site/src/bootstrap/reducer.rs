//! Reducer for the bootstrap feature.
//!
//! Page load starts two independent tracks: the loader overlay walks
//! Covering → Fading → Hidden on timers, and the configured image list is
//! prefetched in parallel, fire-and-forget.

use crate::bootstrap::assets::AssetCache;
use crate::bootstrap::types::{BootstrapAction, BootstrapState, LoaderPhase};
use crate::config::LoaderTiming;
use stagepass_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use std::sync::Arc;

/// Environment dependencies for the bootstrap reducer
#[derive(Clone)]
pub struct BootstrapEnvironment {
    /// The shell's asset cache
    pub assets: Arc<dyn AssetCache>,
    /// Loader dwell/fade timing
    pub loader: LoaderTiming,
    /// Images to prefetch at page load
    pub preload_images: Vec<String>,
}

impl BootstrapEnvironment {
    /// Creates a new `BootstrapEnvironment`
    #[must_use]
    pub fn new(assets: Arc<dyn AssetCache>, loader: LoaderTiming, preload_images: Vec<String>) -> Self {
        Self {
            assets,
            loader,
            preload_images,
        }
    }
}

/// Reducer for page-load sequencing
#[derive(Clone, Debug)]
pub struct BootstrapReducer;

impl BootstrapReducer {
    /// Creates a new `BootstrapReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for BootstrapReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for BootstrapReducer {
    type State = BootstrapState;
    type Action = BootstrapAction;
    type Environment = BootstrapEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            BootstrapAction::PageLoaded => {
                if state.prefetch_started {
                    // Duplicate load events must not restart the sequence
                    return smallvec![Effect::None];
                }
                state.prefetch_started = true;

                tracing::info!(
                    images = env.preload_images.len(),
                    "Page loaded, starting loader dwell and prefetch"
                );

                let prefetches = env
                    .preload_images
                    .iter()
                    .cloned()
                    .map(|url| {
                        let assets = Arc::clone(&env.assets);
                        Effect::Future(Box::pin(async move {
                            assets.prefetch(&url).await;
                            None
                        }))
                    })
                    .collect();

                smallvec![
                    Effect::Delay {
                        duration: env.loader.dwell(),
                        action: Box::new(BootstrapAction::LoaderFadeStarted),
                    },
                    Effect::merge(prefetches),
                ]
            },

            BootstrapAction::LoaderFadeStarted => {
                if state.loader != LoaderPhase::Covering {
                    return smallvec![Effect::None];
                }
                state.loader = LoaderPhase::Fading;

                smallvec![Effect::Delay {
                    duration: env.loader.fade(),
                    action: Box::new(BootstrapAction::LoaderHidden),
                }]
            },

            BootstrapAction::LoaderHidden => {
                if state.loader == LoaderPhase::Fading {
                    state.loader = LoaderPhase::Hidden;
                    tracing::debug!("Loader removed");
                }
                smallvec![Effect::None]
            },
        }
    }
}
