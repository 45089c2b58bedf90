//! Types for the form submission feature.

use crate::notifications::Notice;
use serde::{Deserialize, Serialize};

/// State of the form feature
///
/// Submissions are stateless beyond the notice handed to the site-level
/// reducer; the shell clears form inputs itself after a success.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormsState {
    pending_notice: Option<Notice>,
}

impl FormsState {
    /// Creates the initial forms state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a notice for the site-level reducer to surface
    pub(crate) fn push_notice(&mut self, notice: Notice) {
        self.pending_notice = Some(notice);
    }

    /// Drains the pending notice, if any
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.pending_notice.take()
    }
}

/// Actions processed by the forms reducer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FormsAction {
    /// The contact form was submitted
    SubmitContact {
        /// Sender's name
        name: String,
        /// Sender's email address
        email: String,
        /// Message body
        message: String,
    },

    /// The newsletter signup was submitted
    SubmitNewsletter {
        /// Subscriber's email address
        email: String,
    },
}
