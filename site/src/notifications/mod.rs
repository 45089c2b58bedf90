//! Transient user notifications.
//!
//! Messages slide in, hold for a few seconds, slide out, and disappear —
//! driven entirely by timer effects so the sequence is testable. Concurrent
//! notifications stack independently; there is no queue, cap, or
//! deduplication.

mod reducer;
mod types;

pub use reducer::{NotificationEnvironment, NotificationReducer};
pub use types::{
    Notice, Notification, NotificationAction, NotificationId, NotificationPhase,
    NotificationState, Severity,
};
