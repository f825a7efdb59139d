//! Contact form state and validation.
//!
//! The form's lifecycle lives in one [`ContactState`] value driven by a
//! reducer, so every transition can be unit tested without a rendering
//! environment. Components dispatch [`ContactAction`] values and never
//! mutate state directly.

pub mod form_validation;
pub mod types;

pub use form_validation::{
    get_contact_validation_message, is_valid_email, validate_contact_complete,
};
pub use types::{
    ContactAction, ContactFields, ContactState, EmailValidation, SubmitPhase, ToastNotice,
    SUCCESS_TOAST_ID,
};
