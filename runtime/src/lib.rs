//! # Stagepass Runtime
//!
//! Runtime implementation for the Stagepass interactivity architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that manages state and executes effects
//! - **Effect Executor**: Executes effect descriptions and feeds actions back to reducers
//! - **Debouncer**: Trailing-edge coalescing for bursty event sources (scroll)
//!
//! ## Concurrency Model
//!
//! The Store serializes reducer runs behind a write lock, so state mutations
//! are atomic from the caller's perspective. Effects never run inside that
//! lock: timers (`Effect::Delay`) and collaborator calls (`Effect::Future`)
//! execute in spawned tasks and feed resulting actions back through `send`.
//! This mirrors a browser event loop where handlers are short and synchronous
//! and timers schedule future callbacks rather than suspending execution.
//!
//! ## Example
//!
//! ```ignore
//! use stagepass_runtime::Store;
//!
//! let store = Store::new(SiteState::default(), SiteReducer::new(), environment);
//!
//! // Send an action
//! store.send(SiteAction::Chrome(ChromeAction::ToggleMenu)).await?;
//!
//! // Read state
//! let open = store.state(|s| s.chrome.menu_open).await;
//! ```

use stagepass_core::{effect::Effect, reducer::Reducer};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

pub mod debounce;

pub use debounce::Debouncer;
pub use error::StoreError;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after shutdown initiated.
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Shutdown timed out waiting for effects to complete
        ///
        /// Some effects were still running when the timeout elapsed.
        #[error("Shutdown timed out with {0} effects still running")]
        ShutdownTimeout(usize),

        /// Timed out waiting for the effect cascade to drain
        ///
        /// Returned by `settled` when pending effects remain after the timeout.
        #[error("Timed out with {0} effects still pending")]
        SettleTimeout(usize),
    }
}

/// Decrements the pending-effect counter when dropped
///
/// Effects are tracked across spawned tasks; the guard keeps the counter
/// accurate even if an effect task panics.
struct PendingGuard(Arc<AtomicUsize>);

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// The Store runtime - manages state and executes effects
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
///
/// # Example
///
/// ```ignore
/// let store = Store::new(
///     SiteState::default(),
///     SiteReducer::new(),
///     production_environment(),
/// );
///
/// store.send(SiteAction::Bootstrap(BootstrapAction::PageLoaded)).await?;
/// ```
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
    shutdown: Arc<AtomicBool>,
    pending_effects: Arc<AtomicUsize>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone + Send + Sync + 'static,
    A: Send + 'static,
    S: Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// # Arguments
    ///
    /// - `initial_state`: The starting state for the store
    /// - `reducer`: The reducer implementation (feature logic)
    /// - `environment`: Injected dependencies
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
            shutdown: Arc::new(AtomicBool::new(false)),
            pending_effects: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Send an action to the store
    ///
    /// This is the primary way to interact with the store:
    /// 1. Acquires write lock on state
    /// 2. Calls reducer with (state, action, environment)
    /// 3. Executes returned effects asynchronously
    /// 4. Effects may produce more actions (feedback loop)
    ///
    /// `send()` returns after starting effect execution, not completion.
    /// Multiple concurrent `send()` calls serialize at the reducer level,
    /// and effects may complete in non-deterministic order. Use [`settled`]
    /// to wait for the full cascade (timers included) to drain.
    ///
    /// [`settled`]: Store::settled
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> Result<(), StoreError> {
        if self.shutdown.load(Ordering::Acquire) {
            tracing::warn!("Rejected action: store is shutting down");
            return Err(StoreError::ShutdownInProgress);
        }

        tracing::debug!("Processing action");
        metrics::counter!("store.actions.total").increment(1);

        let effects = {
            let mut state = self.state.write().await;

            let start = std::time::Instant::now();
            let effects = self.reducer.reduce(&mut state, action, &self.environment);
            metrics::histogram!("store.reducer.duration_seconds")
                .record(start.elapsed().as_secs_f64());

            // Note: Precision loss acceptable for metrics (effect counts < 2^52)
            #[allow(clippy::cast_precision_loss)]
            metrics::histogram!("store.effects.count").record(effects.len() as f64);

            effects
        };

        tracing::trace!("Executing {} effects", effects.len());
        for effect in effects {
            self.execute_effect(effect);
        }

        Ok(())
    }

    /// Read current state via a closure
    ///
    /// Access state through a closure to ensure the lock is released promptly:
    ///
    /// ```ignore
    /// let total = store.state(|s| s.purchase.selection().map(|sel| sel.total())).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Number of effects currently pending (including scheduled timers)
    #[must_use]
    pub fn pending_effects(&self) -> usize {
        self.pending_effects.load(Ordering::Acquire)
    }

    /// Wait for the effect cascade to drain
    ///
    /// Polls the pending-effect counter until it reaches zero or the timeout
    /// expires. Actions fed back by effects (and the effects they produce)
    /// count as pending until fully processed, so this waits out entire timer
    /// chains such as a notification's enter/hold/exit sequence.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SettleTimeout`] if pending effects remain when
    /// the timeout expires.
    pub async fn settled(&self, timeout: Duration) -> Result<(), StoreError> {
        let start = std::time::Instant::now();
        let poll_interval = Duration::from_millis(5);

        loop {
            let pending = self.pending_effects.load(Ordering::Acquire);

            if pending == 0 {
                return Ok(());
            }

            if start.elapsed() >= timeout {
                return Err(StoreError::SettleTimeout(pending));
            }

            tokio::time::sleep(poll_interval).await;
        }
    }

    /// Initiate graceful shutdown of the store
    ///
    /// Sets the shutdown flag (rejecting new actions), then waits for pending
    /// effects to complete.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] if the timeout expires before
    /// all pending effects complete.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        tracing::info!("Initiating graceful shutdown");
        metrics::counter!("store.shutdown.initiated").increment(1);

        self.shutdown.store(true, Ordering::Release);

        match self.settled(timeout).await {
            Ok(()) => {
                tracing::info!("All effects completed, shutdown successful");
                metrics::counter!("store.shutdown.completed").increment(1);
                Ok(())
            },
            Err(StoreError::SettleTimeout(pending)) => {
                tracing::error!(
                    pending_effects = pending,
                    "Shutdown timeout: {} effects still running",
                    pending
                );
                metrics::counter!("store.shutdown.timeout").increment(1);
                Err(StoreError::ShutdownTimeout(pending))
            },
            Err(other) => Err(other),
        }
    }

    /// Execute an effect
    ///
    /// # Effect Types
    ///
    /// - `None`: No-op
    /// - `Future`: Executes async computation, feeds resulting action back if `Some`
    /// - `Delay`: Waits for duration, then feeds the action back
    /// - `Parallel`: Executes effects concurrently
    /// - `Sequential`: Executes effects in order, waiting for each to complete
    ///
    /// Effect failures are isolated: a panicking effect task is logged by the
    /// tokio runtime and its pending-counter slot is released by the guard.
    fn execute_effect(&self, effect: Effect<A>) {
        match effect {
            Effect::None => {
                tracing::trace!("Executing Effect::None (no-op)");
                metrics::counter!("store.effects.executed", "type" => "none").increment(1);
            },
            Effect::Future(fut) => {
                tracing::trace!("Executing Effect::Future");
                metrics::counter!("store.effects.executed", "type" => "future").increment(1);

                self.pending_effects.fetch_add(1, Ordering::SeqCst);
                let guard = PendingGuard(Arc::clone(&self.pending_effects));
                let store = self.clone();

                tokio::spawn(async move {
                    let _guard = guard;

                    if let Some(action) = fut.await {
                        tracing::trace!("Effect::Future produced an action, feeding back");
                        let _ = store.send(action).await;
                    }
                });
            },
            Effect::Delay { duration, action } => {
                tracing::trace!("Executing Effect::Delay (duration: {:?})", duration);
                metrics::counter!("store.effects.executed", "type" => "delay").increment(1);

                self.pending_effects.fetch_add(1, Ordering::SeqCst);
                let guard = PendingGuard(Arc::clone(&self.pending_effects));
                let store = self.clone();

                tokio::spawn(async move {
                    let _guard = guard;

                    tokio::time::sleep(duration).await;
                    tracing::trace!("Effect::Delay completed, feeding action back");
                    let _ = store.send(*action).await;
                });
            },
            Effect::Parallel(effects) => {
                tracing::trace!("Executing Effect::Parallel with {} effects", effects.len());
                metrics::counter!("store.effects.executed", "type" => "parallel").increment(1);

                for effect in effects {
                    self.execute_effect(effect);
                }
            },
            Effect::Sequential(effects) => {
                tracing::trace!("Executing Effect::Sequential with {} effects", effects.len());
                metrics::counter!("store.effects.executed", "type" => "sequential").increment(1);

                self.pending_effects.fetch_add(1, Ordering::SeqCst);
                let guard = PendingGuard(Arc::clone(&self.pending_effects));
                let store = self.clone();

                tokio::spawn(async move {
                    let _guard = guard;
                    store.run_in_order(effects).await;
                });
            },
        }
    }

    /// Drive a list of effects to completion one at a time
    ///
    /// Nested `Parallel` effects detach (they do not gate the sequence);
    /// nested `Sequential` effects recurse.
    async fn run_in_order(&self, effects: Vec<Effect<A>>) {
        for effect in effects {
            match effect {
                Effect::None => {},
                Effect::Future(fut) => {
                    if let Some(action) = fut.await {
                        let _ = self.send(action).await;
                    }
                },
                Effect::Delay { duration, action } => {
                    tokio::time::sleep(duration).await;
                    let _ = self.send(*action).await;
                },
                Effect::Parallel(inner) => {
                    for effect in inner {
                        self.execute_effect(effect);
                    }
                },
                Effect::Sequential(inner) => {
                    Box::pin(self.run_in_order(inner)).await;
                },
            }
        }
    }
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
            shutdown: Arc::clone(&self.shutdown),
            pending_effects: Arc::clone(&self.pending_effects),
        }
    }
}
