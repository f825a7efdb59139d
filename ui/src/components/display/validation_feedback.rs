use crate::contact::EmailValidation;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct EmailValidationFeedbackProps {
    pub validation: EmailValidation,
}

#[component]
pub fn EmailValidationFeedback(props: EmailValidationFeedbackProps) -> Element {
    match props.validation {
        EmailValidation::Valid => rsx! {
            div {
                class: "validation-feedback valid",
                style: "color: #10b981; background-color: #d1fae5; border: 1px solid #10b981; padding: 8px; border-radius: 4px; margin-top: 4px;",
                "✓ Valid email address"
            }
        },
        EmailValidation::Invalid => rsx! {
            div {
                class: "validation-feedback invalid",
                style: "color: #ef4444; background-color: #fef2f2; border: 1px solid #ef4444; padding: 8px; border-radius: 4px; margin-top: 4px;",
                "⚠ Please enter a valid email address"
            }
        },
        _ => rsx! { div {} },
    }
}
