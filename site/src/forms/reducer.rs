//! Reducer for form submissions.

use crate::forms::types::{FormsAction, FormsState};
use crate::notifications::Notice;
use crate::validation::is_valid_email;
use stagepass_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Reducer for the contact and newsletter forms
///
/// The contact form only requires its fields to be filled; the newsletter
/// additionally checks the email shape. That asymmetry is the site's shipped
/// behavior, kept as-is.
#[derive(Clone, Debug)]
pub struct FormsReducer;

impl FormsReducer {
    /// Creates a new `FormsReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for FormsReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for FormsReducer {
    type State = FormsState;
    type Action = FormsAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            FormsAction::SubmitContact {
                name,
                email,
                message,
            } => {
                if name.is_empty() || email.is_empty() || message.is_empty() {
                    tracing::info!("Contact form submission rejected: missing fields");
                    state.push_notice(Notice::error("Please fill in all fields"));
                } else {
                    tracing::info!("Contact form submitted");
                    state.push_notice(Notice::success(
                        "Thank you for your message! We'll get back to you soon.",
                    ));
                }
                smallvec![Effect::None]
            },

            FormsAction::SubmitNewsletter { email } => {
                if email.is_empty() {
                    tracing::info!("Newsletter signup rejected: empty email");
                    state.push_notice(Notice::error("Please enter your email address"));
                } else if !is_valid_email(&email) {
                    tracing::info!("Newsletter signup rejected: malformed email");
                    state.push_notice(Notice::error("Please enter a valid email address"));
                } else {
                    tracing::info!("Newsletter signup accepted");
                    state.push_notice(Notice::success(
                        "Thank you for subscribing to our newsletter!",
                    ));
                }
                smallvec![Effect::None]
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::notifications::Severity;
    use stagepass_testing::{ReducerTest, assertions};

    #[test]
    fn complete_contact_submission_succeeds() {
        ReducerTest::new(FormsReducer::new())
            .with_env(())
            .given_state(FormsState::new())
            .when_action(FormsAction::SubmitContact {
                name: "A B".to_string(),
                email: "a@b.co".to_string(),
                message: "See you there".to_string(),
            })
            .then_state(|state| {
                let notice = state.clone().take_notice().unwrap();
                assert_eq!(notice.severity, Severity::Success);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn contact_with_any_empty_field_errors() {
        ReducerTest::new(FormsReducer::new())
            .with_env(())
            .given_state(FormsState::new())
            .when_action(FormsAction::SubmitContact {
                name: "A B".to_string(),
                email: "a@b.co".to_string(),
                message: String::new(),
            })
            .then_state(|state| {
                let notice = state.clone().take_notice().unwrap();
                assert_eq!(notice.severity, Severity::Error);
                assert_eq!(notice.message, "Please fill in all fields");
            })
            .run();
    }

    #[test]
    fn contact_does_not_check_email_shape() {
        // The contact form has never validated email shape; only presence
        ReducerTest::new(FormsReducer::new())
            .with_env(())
            .given_state(FormsState::new())
            .when_action(FormsAction::SubmitContact {
                name: "A B".to_string(),
                email: "not-an-email".to_string(),
                message: "hello".to_string(),
            })
            .then_state(|state| {
                let notice = state.clone().take_notice().unwrap();
                assert_eq!(notice.severity, Severity::Success);
            })
            .run();
    }

    #[test]
    fn newsletter_requires_an_email() {
        ReducerTest::new(FormsReducer::new())
            .with_env(())
            .given_state(FormsState::new())
            .when_action(FormsAction::SubmitNewsletter {
                email: String::new(),
            })
            .then_state(|state| {
                let notice = state.clone().take_notice().unwrap();
                assert_eq!(notice.message, "Please enter your email address");
            })
            .run();
    }

    #[test]
    fn newsletter_rejects_malformed_email() {
        ReducerTest::new(FormsReducer::new())
            .with_env(())
            .given_state(FormsState::new())
            .when_action(FormsAction::SubmitNewsletter {
                email: "a@b".to_string(),
            })
            .then_state(|state| {
                let notice = state.clone().take_notice().unwrap();
                assert_eq!(notice.message, "Please enter a valid email address");
            })
            .run();
    }

    #[test]
    fn newsletter_accepts_well_shaped_email() {
        ReducerTest::new(FormsReducer::new())
            .with_env(())
            .given_state(FormsState::new())
            .when_action(FormsAction::SubmitNewsletter {
                email: "a@b.co".to_string(),
            })
            .then_state(|state| {
                let notice = state.clone().take_notice().unwrap();
                assert_eq!(notice.severity, Severity::Success);
            })
            .run();
    }
}
