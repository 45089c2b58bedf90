//! Reducer for the notification feature.
//!
//! The lifecycle is a timer cascade: `Show` schedules `Entered`, which
//! schedules `Dismiss`, which schedules `Expired`. A notification removed
//! early leaves its timers to fire harmlessly against an unknown id.

use crate::config::NotificationTiming;
use crate::notifications::types::{
    Notification, NotificationAction, NotificationPhase, NotificationState,
};
use stagepass_core::{SmallVec, effect::Effect, environment::Clock, reducer::Reducer, smallvec};
use std::sync::Arc;

/// Environment dependencies for the notification reducer
#[derive(Clone)]
pub struct NotificationEnvironment {
    /// Clock for stamping creation times
    pub clock: Arc<dyn Clock>,
    /// Enter/hold/exit timing
    pub timing: NotificationTiming,
}

impl NotificationEnvironment {
    /// Creates a new `NotificationEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, timing: NotificationTiming) -> Self {
        Self { clock, timing }
    }
}

/// Reducer for transient notifications
#[derive(Clone, Debug)]
pub struct NotificationReducer;

impl NotificationReducer {
    /// Creates a new `NotificationReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for NotificationReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for NotificationReducer {
    type State = NotificationState;
    type Action = NotificationAction;
    type Environment = NotificationEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            NotificationAction::Show { message, severity } => {
                let id = state.allocate_id();
                tracing::debug!(%id, %severity, "Showing notification");

                state.push(Notification {
                    id,
                    message,
                    severity,
                    created_at: env.clock.now(),
                    phase: NotificationPhase::Entering,
                });

                smallvec![Effect::Delay {
                    duration: env.timing.enter(),
                    action: Box::new(NotificationAction::Entered { id }),
                }]
            },

            NotificationAction::Entered { id } => {
                let Some(notification) = state.get_mut(id) else {
                    // Already removed; the stale timer is harmless
                    return smallvec![Effect::None];
                };

                if notification.phase != NotificationPhase::Entering {
                    return smallvec![Effect::None];
                }

                notification.phase = NotificationPhase::Visible;

                smallvec![Effect::Delay {
                    duration: env.timing.hold(),
                    action: Box::new(NotificationAction::Dismiss { id }),
                }]
            },

            NotificationAction::Dismiss { id } => {
                let Some(notification) = state.get_mut(id) else {
                    return smallvec![Effect::None];
                };

                if notification.phase == NotificationPhase::Leaving {
                    return smallvec![Effect::None];
                }

                notification.phase = NotificationPhase::Leaving;

                smallvec![Effect::Delay {
                    duration: env.timing.exit(),
                    action: Box::new(NotificationAction::Expired { id }),
                }]
            },

            NotificationAction::Expired { id } => {
                if state.remove(id).is_some() {
                    tracing::debug!(%id, "Notification expired");
                }
                smallvec![Effect::None]
            },
        }
    }
}
