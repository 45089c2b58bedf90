//! Types for the notification feature.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How strongly a notification should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A completed action ("purchase successful")
    Success,
    /// A recoverable user mistake ("please fill in all fields")
    Error,
    /// Neutral information
    Info,
}

impl Severity {
    /// Stable lowercase identifier, as used in markup class hooks
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to show a notification
///
/// Features that want to surface a message record a `Notice`; the site-level
/// reducer forwards it to the notification feature. Keeping the request as a
/// plain value keeps feature reducers decoupled from notification internals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Message text shown to the user
    pub message: String,
    /// Styling severity
    pub severity: Severity,
}

impl Notice {
    /// A success notice
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    /// An error notice
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// An informational notice
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }
}

/// Identifier for one on-screen notification
///
/// Ids are a per-session serial allocated by the state, which keeps the
/// reducer deterministic (no id generation inside reduce).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(u64);

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a notification is in its on-screen lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationPhase {
    /// Created, slide-in transition not yet settled
    Entering,
    /// Fully visible, holding
    Visible,
    /// Slide-out transition running
    Leaving,
}

/// One on-screen notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Identifier used by the dismissal timers
    pub id: NotificationId,
    /// Message text
    pub message: String,
    /// Styling severity
    pub severity: Severity,
    /// When the notification was created
    pub created_at: DateTime<Utc>,
    /// Current lifecycle phase
    pub phase: NotificationPhase,
}

/// State of the notification feature
///
/// Active notifications in creation order plus the id serial. Unbounded:
/// concurrent notifications may visually overlap, which is the accepted
/// behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationState {
    active: Vec<Notification>,
    next_id: u64,
}

impl NotificationState {
    /// Creates an empty notification state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next notification id
    pub(crate) fn allocate_id(&mut self) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Adds a notification
    pub(crate) fn push(&mut self, notification: Notification) {
        self.active.push(notification);
    }

    /// Looks up a notification by id
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.active.iter().find(|n| n.id == id)
    }

    /// Mutable lookup by id
    pub(crate) fn get_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.active.iter_mut().find(|n| n.id == id)
    }

    /// Removes a notification by id, returning it if present
    pub(crate) fn remove(&mut self, id: NotificationId) -> Option<Notification> {
        let index = self.active.iter().position(|n| n.id == id)?;
        Some(self.active.remove(index))
    }

    /// Active notifications in creation order
    #[must_use]
    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    /// Number of active notifications
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no notifications are active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Actions processed by the notification reducer
///
/// `Show` is the public entry point; the remaining actions are scheduled by
/// the feature's own timer effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NotificationAction {
    /// Present a new notification
    Show {
        /// Message text
        message: String,
        /// Styling severity
        severity: Severity,
    },

    /// Entrance transition settled; the notification is fully visible
    Entered {
        /// Notification to update
        id: NotificationId,
    },

    /// Hold window elapsed; begin the exit transition
    Dismiss {
        /// Notification to update
        id: NotificationId,
    },

    /// Exit transition finished; drop the notification
    Expired {
        /// Notification to remove
        id: NotificationId,
    },
}
