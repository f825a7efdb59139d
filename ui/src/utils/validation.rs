use crate::contact::{ContactState, EmailValidation};

impl ContactState {
    /// Tri-state view of the email field for inline feedback: no feedback
    /// while the field is empty.
    pub fn validate_email(&self) -> EmailValidation {
        if self.fields.email.trim().is_empty() {
            EmailValidation::None
        } else if self.email_valid {
            EmailValidation::Valid
        } else {
            EmailValidation::Invalid
        }
    }
}

pub fn email_validation_class(validation: &EmailValidation) -> &'static str {
    match validation {
        EmailValidation::Valid => "input-field input-valid",
        EmailValidation::Invalid => "input-field input-invalid",
        _ => "input-field",
    }
}

pub fn email_validation_style(validation: &EmailValidation) -> &'static str {
    match validation {
        EmailValidation::Valid => "border: 2px solid #10b981; background-color: #f0fdf4;",
        EmailValidation::Invalid => "border: 2px solid #ef4444; background-color: #fef2f2;",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactAction;

    #[test]
    fn test_validate_email_tristate() {
        let mut state = ContactState::default();
        assert_eq!(state.validate_email(), EmailValidation::None);

        state.reduce_in_place(ContactAction::SetEmail("a@b.com".to_string()));
        assert_eq!(state.validate_email(), EmailValidation::Valid);

        state.reduce_in_place(ContactAction::SetEmail("a@b".to_string()));
        assert_eq!(state.validate_email(), EmailValidation::Invalid);
    }
}
