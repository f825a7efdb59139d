use crate::contact::types::ContactState;

/// Syntax check for an email address: exactly one `@`, non-empty local part,
/// and a domain that contains a dot and is longer than two characters.
pub fn is_valid_email(email: &str) -> bool {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local_part = parts[0];
    let domain_part = parts[1];

    !local_part.is_empty() && domain_part.contains('.') && domain_part.len() > 2
}

/// Validates that all required contact fields are filled and the email is valid
pub fn validate_contact_complete(state: &ContactState) -> bool {
    !state.fields.name.trim().is_empty()
        && !state.fields.email.trim().is_empty()
        && !state.fields.phone_number.trim().is_empty()
        && !state.fields.message.trim().is_empty()
        && state.email_valid
}

/// Gets user-friendly validation message for the current form state
pub fn get_contact_validation_message(state: &ContactState) -> Option<String> {
    if state.fields.name.trim().is_empty() {
        return Some("Please enter your name".to_string());
    }

    if state.fields.email.trim().is_empty() {
        return Some("Please enter your email address".to_string());
    }

    if !state.email_valid {
        return Some("Please enter a valid email address".to_string());
    }

    if state.fields.phone_number.trim().is_empty() {
        return Some("Please enter your phone number".to_string());
    }

    if state.fields.message.trim().is_empty() {
        return Some("Please enter a message".to_string());
    }

    None
}
