//! Page chrome: navigation menu, scroll treatments, smooth scrolling, and
//! reveal-on-first-sight animations.
//!
//! Everything here is a stateless reaction to page events — the state fields
//! are the output the shell binds to markup, and the only memory kept is
//! which elements have already been revealed.

mod reducer;
mod types;
pub mod viewport;

pub use reducer::{ChromeEnvironment, ChromeReducer};
pub use types::{ChromeAction, ChromeState};
pub use viewport::{NoopViewport, RecordingViewport, Viewport, ViewportCommand};
