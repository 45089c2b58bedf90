//! # Stagepass Core
//!
//! Core traits and types for the Stagepass page-interactivity architecture.
//!
//! This crate provides the fundamental abstractions for expressing browser-style
//! event handling as explicit, testable state machines using the Reducer pattern.
//!
//! ## Core Concepts
//!
//! - **State**: Owned domain state for a feature (modal session, notification
//!   stack, page chrome)
//! - **Action**: All possible inputs to a reducer (user interactions, timer
//!   expirations, feedback from effects)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution) — timers, collaborator
//!   calls, follow-up actions
//! - **Environment**: Injected dependencies via traits (clock, order processor,
//!   viewport)
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O, no ambient DOM lookups)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```ignore
//! use stagepass_core::*;
//!
//! #[derive(Clone, Debug, Default)]
//! struct MenuState {
//!     open: bool,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum MenuAction {
//!     Toggle,
//! }
//!
//! impl Reducer for MenuReducer {
//!     type State = MenuState;
//!     type Action = MenuAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut MenuState,
//!         action: MenuAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<MenuAction>; 4]> {
//!         match action {
//!             MenuAction::Toggle => {
//!                 state.open = !state.open;
//!                 smallvec![Effect::None]
//!             }
//!         }
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};

pub use effect::Effect;
pub use reducer::Reducer;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They contain all feature logic and are deterministic and testable without a
/// running UI.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for feature logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for PurchaseReducer {
    ///     type State = PurchaseState;
    ///     type Action = PurchaseAction;
    ///     type Environment = PurchaseEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut PurchaseState,
    ///         action: PurchaseAction,
    ///         env: &PurchaseEnvironment,
    ///     ) -> SmallVec<[Effect<PurchaseAction>; 4]> {
    ///         match action {
    ///             PurchaseAction::Cancel => {
    ///                 state.close_modal();
    ///                 smallvec![Effect::None]
    ///             }
    ///             _ => smallvec![Effect::None],
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// Effects to be executed by the runtime. Most actions produce zero or
        /// one effect, so the inline capacity of four avoids heap allocation.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime. They are
/// values (not execution) and are composable. Timers are `Delay` effects; calls
/// to external collaborators (order processor, viewport, asset cache) are
/// `Future` effects.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[allow(missing_docs)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Run effects sequentially
        Sequential(Vec<Effect<Action>>),

        /// Delayed action (timer-scheduled callbacks: loader dwell,
        /// notification auto-dismissal)
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after delay
            action: Box<Action>,
        },

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into the
        /// reducer. Fire-and-forget collaborator calls return `None`.
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }
    }

    impl<Action> Effect<Action>
    where
        Action: Send + 'static,
    {
        /// Dispatch a follow-up action immediately
        ///
        /// Sugar for a `Future` effect that resolves right away. Used when one
        /// feature's reducer needs to hand an action to another feature through
        /// the runtime's feedback loop.
        #[must_use]
        pub fn send(action: Action) -> Effect<Action> {
            Effect::Future(Box::pin(async move { Some(action) }))
        }

        /// Re-wrap this effect's actions into a parent action type
        ///
        /// A parent reducer delegates to a feature reducer and embeds the
        /// feature's effects in its own action vocabulary:
        ///
        /// ```ignore
        /// let effects = PurchaseReducer.reduce(&mut state.purchase, action, env);
        /// effects.into_iter().map(|e| e.map(SiteAction::Purchase))
        /// ```
        #[must_use]
        pub fn map<Parent>(self, f: fn(Action) -> Parent) -> Effect<Parent>
        where
            Parent: Send + 'static,
        {
            match self {
                Effect::None => Effect::None,
                Effect::Parallel(effects) => {
                    Effect::Parallel(effects.into_iter().map(|e| e.map(f)).collect())
                },
                Effect::Sequential(effects) => {
                    Effect::Sequential(effects.into_iter().map(|e| e.map(f)).collect())
                },
                Effect::Delay { duration, action } => Effect::Delay {
                    duration,
                    action: Box::new(f(*action)),
                },
                Effect::Future(fut) => {
                    Effect::Future(Box::pin(async move { fut.await.map(f) }))
                },
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected via the
/// Environment parameter. Production wires real implementations; tests wire
/// deterministic ones.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use stagepass_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let now = clock.now();
    /// assert!(now.timestamp() > 0);
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}
