//! Site-level composition.
//!
//! One store drives the whole page: each feature keeps its own state,
//! actions, and reducer, and the site reducer delegates by feature, re-wraps
//! feature effects into the site action type, and surfaces feature notices
//! through the notification feature. The purchase flow, page chrome, and
//! bootstrap are independent listeners with no data dependency on each other.

use crate::bootstrap::{
    BootstrapAction, BootstrapEnvironment, BootstrapReducer, BootstrapState, NoopAssetCache,
};
use crate::chrome::{ChromeAction, ChromeEnvironment, ChromeReducer, ChromeState, NoopViewport};
use crate::config::SiteConfig;
use crate::forms::{FormsAction, FormsReducer, FormsState};
use crate::notifications::{
    Notice, NotificationAction, NotificationEnvironment, NotificationReducer, NotificationState,
};
use crate::purchase::{
    MockOrderProcessor, PurchaseAction, PurchaseEnvironment, PurchaseReducer, PurchaseState,
};
use serde::{Deserialize, Serialize};
use stagepass_core::{SmallVec, effect::Effect, environment::SystemClock, reducer::Reducer};
use std::sync::Arc;

/// State for the whole page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteState {
    /// Ticket purchase flow
    pub purchase: PurchaseState,
    /// Active notifications
    pub notifications: NotificationState,
    /// Page chrome
    pub chrome: ChromeState,
    /// Contact and newsletter forms
    pub forms: FormsState,
    /// Loader and prefetch
    pub bootstrap: BootstrapState,
}

/// All input events the page reacts to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SiteAction {
    /// Purchase flow events
    Purchase(PurchaseAction),
    /// Notification lifecycle events
    Notification(NotificationAction),
    /// Page chrome events
    Chrome(ChromeAction),
    /// Form submissions
    Forms(FormsAction),
    /// Page-load sequencing events
    Bootstrap(BootstrapAction),
}

/// Injected dependencies for every feature
///
/// Collaborators are shared: the purchase flow and the chrome drive the same
/// viewport, and all features read the same clock.
#[derive(Clone)]
pub struct SiteEnvironment {
    /// Purchase flow dependencies
    pub purchase: PurchaseEnvironment,
    /// Notification dependencies
    pub notifications: NotificationEnvironment,
    /// Chrome dependencies
    pub chrome: ChromeEnvironment,
    /// Bootstrap dependencies
    pub bootstrap: BootstrapEnvironment,
}

impl SiteEnvironment {
    /// Wires an environment from configuration and collaborators
    #[must_use]
    pub fn new(
        config: &SiteConfig,
        clock: Arc<dyn stagepass_core::environment::Clock>,
        processor: Arc<dyn crate::purchase::OrderProcessor>,
        viewport: Arc<dyn crate::chrome::Viewport>,
        assets: Arc<dyn crate::bootstrap::AssetCache>,
    ) -> Self {
        let catalog = Arc::new(config.ticket_catalog());

        Self {
            purchase: PurchaseEnvironment::new(
                Arc::clone(&clock),
                catalog,
                processor,
                Arc::clone(&viewport),
            ),
            notifications: NotificationEnvironment::new(clock, config.notifications),
            chrome: ChromeEnvironment::new(viewport, config.scroll),
            bootstrap: BootstrapEnvironment::new(
                assets,
                config.loader,
                config.preload_images.clone(),
            ),
        }
    }

    /// Production wiring: system clock, mock processor, headless collaborators
    ///
    /// The order processor stays a mock until a real payment integration
    /// exists; the viewport and asset cache are bound by the browser shell.
    #[must_use]
    pub fn production(config: &SiteConfig) -> Self {
        Self::new(
            config,
            Arc::new(SystemClock),
            Arc::new(MockOrderProcessor::new()),
            Arc::new(NoopViewport),
            Arc::new(NoopAssetCache),
        )
    }
}

/// Reducer for the whole page
#[derive(Clone, Debug, Default)]
pub struct SiteReducer {
    purchase: PurchaseReducer,
    notifications: NotificationReducer,
    chrome: ChromeReducer,
    forms: FormsReducer,
    bootstrap: BootstrapReducer,
}

impl SiteReducer {
    /// Creates a new `SiteReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            purchase: PurchaseReducer::new(),
            notifications: NotificationReducer::new(),
            chrome: ChromeReducer::new(),
            forms: FormsReducer::new(),
            bootstrap: BootstrapReducer::new(),
        }
    }

    /// Routes a feature's notice into the notification feature
    ///
    /// Runs the notification reducer synchronously, matching the page's
    /// original behavior of showing the message inside the submitting
    /// handler.
    fn show_notice(
        &self,
        state: &mut SiteState,
        notice: Notice,
        env: &SiteEnvironment,
    ) -> SmallVec<[Effect<SiteAction>; 4]> {
        self.notifications
            .reduce(
                &mut state.notifications,
                NotificationAction::Show {
                    message: notice.message,
                    severity: notice.severity,
                },
                &env.notifications,
            )
            .into_iter()
            .map(|effect| effect.map(SiteAction::Notification))
            .collect()
    }
}

impl Reducer for SiteReducer {
    type State = SiteState;
    type Action = SiteAction;
    type Environment = SiteEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            SiteAction::Purchase(action) => {
                let mut effects: SmallVec<[Effect<SiteAction>; 4]> = self
                    .purchase
                    .reduce(&mut state.purchase, action, &env.purchase)
                    .into_iter()
                    .map(|effect| effect.map(SiteAction::Purchase))
                    .collect();

                if let Some(notice) = state.purchase.take_notice() {
                    effects.extend(self.show_notice(state, notice, env));
                }

                effects
            },

            SiteAction::Forms(action) => {
                let mut effects: SmallVec<[Effect<SiteAction>; 4]> = self
                    .forms
                    .reduce(&mut state.forms, action, &())
                    .into_iter()
                    .map(|effect| effect.map(SiteAction::Forms))
                    .collect();

                if let Some(notice) = state.forms.take_notice() {
                    effects.extend(self.show_notice(state, notice, env));
                }

                effects
            },

            SiteAction::Notification(action) => self
                .notifications
                .reduce(&mut state.notifications, action, &env.notifications)
                .into_iter()
                .map(|effect| effect.map(SiteAction::Notification))
                .collect(),

            SiteAction::Chrome(action) => self
                .chrome
                .reduce(&mut state.chrome, action, &env.chrome)
                .into_iter()
                .map(|effect| effect.map(SiteAction::Chrome))
                .collect(),

            SiteAction::Bootstrap(action) => self
                .bootstrap
                .reduce(&mut state.bootstrap, action, &env.bootstrap)
                .into_iter()
                .map(|effect| effect.map(SiteAction::Bootstrap))
                .collect(),
        }
    }
}
