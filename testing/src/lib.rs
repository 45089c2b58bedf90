//! # Stagepass Testing
//!
//! Testing utilities and helpers for the Stagepass interactivity architecture.
//!
//! This crate provides:
//! - Deterministic mock implementations of Environment traits
//! - A fluent Given-When-Then harness for reducer tests
//! - Assertion helpers for effect vectors
//!
//! ## Example
//!
//! ```ignore
//! use stagepass_testing::{ReducerTest, test_clock};
//!
//! ReducerTest::new(PurchaseReducer::new())
//!     .with_env(test_environment())
//!     .given_state(PurchaseState::default())
//!     .when_action(PurchaseAction::Cancel)
//!     .then_state(|state| assert!(state.is_closed()))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use stagepass_core::environment::Clock;

pub mod reducer_test;

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use stagepass_testing::mocks::FixedClock;
    /// use stagepass_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::{ReducerTest, assertions};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }
}
