//! Trailing-edge debounce for bursty event sources.
//!
//! Scroll and resize events arrive in bursts far faster than state needs to
//! change. The debouncer coalesces a burst into a single trailing delivery:
//! each call supersedes the previous one, and only the last call in a burst is
//! sent to the store, after a quiet period with no further calls.
//!
//! This is a performance policy, not a correctness requirement — dropping
//! intermediate scroll positions only skips intermediate visual states.

use crate::Store;
use stagepass_core::reducer::Reducer;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Default quiet period, roughly one frame at 60Hz
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(16);

/// Trailing-edge debouncer for store actions
///
/// # Example
///
/// ```ignore
/// let debouncer = Debouncer::default();
///
/// // A burst of scroll positions...
/// for y in [10, 50, 120, 480, 560] {
///     debouncer.send(&store, SiteAction::Chrome(ChromeAction::ScrollChanged { y }));
/// }
/// // ...delivers only the final position, ~16ms after the burst ends.
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet_period: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period
    #[must_use]
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Schedule an action, superseding any not-yet-delivered one
    ///
    /// The action is sent to the store once the quiet period elapses without
    /// another `send` call. Earlier pending actions from the same debouncer
    /// are discarded.
    pub fn send<S, A, E, R>(&self, store: &Store<S, A, E, R>, action: A)
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone + Send + Sync + 'static,
        A: Send + 'static,
        S: Send + Sync + 'static,
        E: Clone + Send + Sync + 'static,
    {
        let scheduled = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let quiet_period = self.quiet_period;
        let store = store.clone();

        tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;

            // Superseded by a later call during the quiet period
            if generation.load(Ordering::SeqCst) != scheduled {
                tracing::trace!("Debounced action superseded");
                return;
            }

            let _ = store.send(action).await;
        });
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use stagepass_core::{Effect, SmallVec, smallvec};

    #[derive(Debug, Clone, Default)]
    struct ScrollState {
        last_y: u64,
        deliveries: u32,
    }

    #[derive(Debug, Clone)]
    struct ScrollTo {
        y: u64,
    }

    #[derive(Clone)]
    struct ScrollReducer;

    impl Reducer for ScrollReducer {
        type State = ScrollState;
        type Action = ScrollTo;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            state.last_y = action.y;
            state.deliveries += 1;
            smallvec![Effect::None]
        }
    }

    #[tokio::test]
    async fn burst_coalesces_to_trailing_value() {
        let store = Store::new(ScrollState::default(), ScrollReducer, ());
        let debouncer = Debouncer::new(Duration::from_millis(20));

        for y in [10, 50, 120, 480, 560] {
            debouncer.send(&store, ScrollTo { y });
        }

        tokio::time::sleep(Duration::from_millis(80)).await;

        let state = store.state(Clone::clone).await;
        assert_eq!(state.deliveries, 1);
        assert_eq!(state.last_y, 560);
    }

    #[tokio::test]
    async fn separate_bursts_deliver_separately() {
        let store = Store::new(ScrollState::default(), ScrollReducer, ());
        let debouncer = Debouncer::new(Duration::from_millis(10));

        debouncer.send(&store, ScrollTo { y: 100 });
        tokio::time::sleep(Duration::from_millis(50)).await;

        debouncer.send(&store, ScrollTo { y: 700 });
        tokio::time::sleep(Duration::from_millis(50)).await;

        let state = store.state(Clone::clone).await;
        assert_eq!(state.deliveries, 2);
        assert_eq!(state.last_y, 700);
    }
}
