// Core types for the contact form - no dioxus imports needed here

use crate::contact::form_validation::{is_valid_email, validate_contact_complete};

/// Stable identifier for the success toast so repeated renders never queue
/// a duplicate notification.
pub const SUCCESS_TOAST_ID: &str = "contact-succeeded";

// Coarse lifecycle of one form session
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Succeeded,
}

// Validation status for the email field
#[derive(Clone, PartialEq, Debug)]
pub enum EmailValidation {
    None,
    Valid,
    Invalid,
}

/// Raw field values as typed by the user.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub message: String,
}

/// A transient user-facing notification.
#[derive(Clone, PartialEq, Debug)]
pub struct ToastNotice {
    pub id: String,
    pub message: String,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum ContactAction {
    SetName(String),
    SetEmail(String),
    SetPhoneNumber(String),
    SetMessage(String),

    // Submission lifecycle
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed(String),

    // Notification
    DismissToast,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ContactState {
    pub phase: SubmitPhase,
    pub fields: ContactFields,
    pub email_valid: bool,
    pub errors: Vec<String>,
    pub toast: Option<ToastNotice>,
}

impl ContactState {
    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: ContactAction) {
        match action {
            ContactAction::SetName(name) => {
                self.fields.name = name;
            }
            ContactAction::SetEmail(email) => {
                self.email_valid = is_valid_email(email.trim());
                self.fields.email = email;
            }
            ContactAction::SetPhoneNumber(phone_number) => {
                self.fields.phone_number = phone_number;
            }
            ContactAction::SetMessage(message) => {
                self.fields.message = message;
            }

            ContactAction::SubmitStarted => {
                // Guard against duplicate in-flight submissions and against
                // submission with incomplete or invalid fields.
                if !self.can_submit() {
                    return;
                }
                self.errors.clear();
                self.phase = SubmitPhase::Submitting;
            }
            ContactAction::SubmitSucceeded => {
                // A completion that arrives after the state moved on is a no-op.
                if self.phase != SubmitPhase::Submitting {
                    return;
                }
                self.phase = SubmitPhase::Succeeded;
                self.fields = ContactFields::default();
                self.email_valid = false;
                self.errors.clear();
                if self.toast.as_ref().map(|t| t.id.as_str()) != Some(SUCCESS_TOAST_ID) {
                    self.toast = Some(ToastNotice {
                        id: SUCCESS_TOAST_ID.to_string(),
                        message: "Email successfully sent!".to_string(),
                    });
                }
            }
            ContactAction::SubmitFailed(reason) => {
                if self.phase != SubmitPhase::Submitting {
                    return;
                }
                // Field values stay intact so the user can correct and retry.
                self.phase = SubmitPhase::Idle;
                self.errors = vec![reason];
            }

            ContactAction::DismissToast => {
                self.toast = None;
            }
        }
    }

    /// Reduces the state based on an action
    pub fn reduce(mut self, action: ContactAction) -> Self {
        self.reduce_in_place(action);
        self
    }

    /// Helper methods for common state queries
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn succeeded(&self) -> bool {
        self.phase == SubmitPhase::Succeeded
    }

    /// The submit gate: every field filled, email syntactically valid, and no
    /// submission already in flight.
    pub fn can_submit(&self) -> bool {
        validate_contact_complete(self) && self.phase != SubmitPhase::Submitting
    }
}

impl Default for ContactState {
    fn default() -> Self {
        Self {
            phase: SubmitPhase::Idle,
            fields: ContactFields::default(),
            email_valid: false,
            errors: Vec::new(),
            toast: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> ContactState {
        let mut state = ContactState::default();
        state.reduce_in_place(ContactAction::SetName("Ada".to_string()));
        state.reduce_in_place(ContactAction::SetEmail("ada@example.com".to_string()));
        state.reduce_in_place(ContactAction::SetPhoneNumber("555-0100".to_string()));
        state.reduce_in_place(ContactAction::SetMessage("Hello there".to_string()));
        state
    }

    #[test]
    fn test_set_email_recomputes_validity() {
        let mut state = ContactState::default();

        state.reduce_in_place(ContactAction::SetEmail("a@b.com".to_string()));
        assert!(state.email_valid);

        state.reduce_in_place(ContactAction::SetEmail("a@b".to_string()));
        assert!(!state.email_valid);
    }

    #[test]
    fn test_submit_guard_requires_all_fields() {
        let mut state = ContactState::default();

        // Empty form cannot submit
        assert!(!state.can_submit());
        state.reduce_in_place(ContactAction::SubmitStarted);
        assert_eq!(state.phase, SubmitPhase::Idle);

        // Whitespace-only fields do not count as filled
        state = filled_state();
        state.reduce_in_place(ContactAction::SetMessage("   ".to_string()));
        assert!(!state.can_submit());

        state = filled_state();
        state.reduce_in_place(ContactAction::SetEmail("not-an-email".to_string()));
        assert!(!state.can_submit());

        assert!(filled_state().can_submit());
    }

    #[test]
    fn test_successful_submission_clears_fields_and_emits_toast_once() {
        let mut state = filled_state();

        state.reduce_in_place(ContactAction::SubmitStarted);
        assert_eq!(state.phase, SubmitPhase::Submitting);

        state.reduce_in_place(ContactAction::SubmitSucceeded);
        assert_eq!(state.phase, SubmitPhase::Succeeded);
        assert_eq!(state.fields, ContactFields::default());
        assert!(state.errors.is_empty());

        let toast = state.toast.clone().unwrap();
        assert_eq!(toast.id, SUCCESS_TOAST_ID);

        // A stray duplicate completion changes nothing
        let before = state.clone();
        state.reduce_in_place(ContactAction::SubmitSucceeded);
        assert_eq!(state, before);
    }

    #[test]
    fn test_failed_submission_keeps_fields_and_reports_one_error() {
        let mut state = filled_state();
        let fields_before = state.fields.clone();

        state.reduce_in_place(ContactAction::SubmitStarted);
        state.reduce_in_place(ContactAction::SubmitFailed("Invalid access key".to_string()));

        assert_eq!(state.phase, SubmitPhase::Idle);
        assert_eq!(state.errors, vec!["Invalid access key".to_string()]);
        assert_eq!(state.fields, fields_before);

        // Errors are cleared when the user retries
        state.reduce_in_place(ContactAction::SubmitStarted);
        assert_eq!(state.phase, SubmitPhase::Submitting);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_resubmit_while_submitting_is_noop() {
        let mut state = filled_state();
        state.reduce_in_place(ContactAction::SubmitStarted);

        let before = state.clone();
        state.reduce_in_place(ContactAction::SubmitStarted);
        assert_eq!(state, before);
    }

    #[test]
    fn test_completions_outside_submitting_are_noops() {
        // Completion arriving while Idle (e.g. after the session was reset)
        let mut state = filled_state();
        let before = state.clone();
        state.reduce_in_place(ContactAction::SubmitFailed("late".to_string()));
        assert_eq!(state, before);

        // Succeeded is terminal
        let mut state = filled_state();
        state.reduce_in_place(ContactAction::SubmitStarted);
        state.reduce_in_place(ContactAction::SubmitSucceeded);
        let before = state.clone();
        state.reduce_in_place(ContactAction::SubmitFailed("late".to_string()));
        assert_eq!(state.phase, SubmitPhase::Succeeded);
        assert_eq!(state, before);
    }

    #[test]
    fn test_dismiss_toast() {
        let mut state = filled_state();
        state.reduce_in_place(ContactAction::SubmitStarted);
        state.reduce_in_place(ContactAction::SubmitSucceeded);
        assert!(state.toast.is_some());

        state.reduce_in_place(ContactAction::DismissToast);
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_can_submit_delegates_to_completeness_gate() {
        let mut state = filled_state();
        assert_eq!(state.can_submit(), validate_contact_complete(&state));

        state.reduce_in_place(ContactAction::SetEmail("nope".to_string()));
        assert_eq!(state.can_submit(), validate_contact_complete(&state));
        assert!(!state.can_submit());

        // The gate adds exactly one condition on top of field completeness
        let mut state = filled_state();
        state.reduce_in_place(ContactAction::SubmitStarted);
        assert!(validate_contact_complete(&state));
        assert!(!state.can_submit());
    }

    #[test]
    fn test_consuming_reduce_matches_in_place() {
        let state = filled_state().reduce(ContactAction::SubmitStarted);
        assert_eq!(state.phase, SubmitPhase::Submitting);
    }
}
