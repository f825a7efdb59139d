use dioxus::prelude::*;

use crate::components::{
    display::{EmailValidationFeedback, Toast},
    inputs::{InputType, ValidatedInput, ValidatedTextArea},
};
use crate::{console_error, console_info};
use crate::contact::{
    get_contact_validation_message, validate_contact_complete, ContactAction, ContactState,
};
use crate::services::relay::{ContactRequest, RelayClient, RelayOutcome, GENERIC_FAILURE_MESSAGE};
use crate::utils::validation::{email_validation_class, email_validation_style};

#[derive(Props, PartialEq, Clone)]
pub struct ContactFormProps {
    pub state: Signal<ContactState>,
    pub dispatch: EventHandler<ContactAction>,
}

/// Smooth-scroll the page back to the top.
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[component]
pub fn ContactForm(props: ContactFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    // After a successful submission the form is replaced by a thank-you view;
    // the phase never transitions back, so the form stays gone for the session.
    if state().succeeded() {
        return rsx! {
            div {
                class: "contact-form contact-success",
                h3 { "Thanks for getting in touch!" }
                button {
                    class: "back-to-top-button",
                    onclick: move |_| scroll_to_top(),
                    "Back to the top"
                }
                if let Some(notice) = state().toast {
                    Toast {
                        notice: notice,
                        on_dismiss: move |_| dispatch.call(ContactAction::DismissToast)
                    }
                }
            }
        };
    }

    let email_validation = state().validate_email();

    rsx! {
        div {
            class: "contact-form",

            h2 {
                class: "form-title",
                "Get in touch using the form"
            }

            div {
                class: "input-section",
                ValidatedInput {
                    value: state().fields.name,
                    placeholder: "Name".to_string(),
                    input_type: InputType::Text,
                    input_class: "input-field".to_string(),
                    input_style: "".to_string(),
                    disabled: state().is_submitting(),
                    on_change: move |data: String| {
                        dispatch.call(ContactAction::SetName(data));
                    }
                }
            }

            div {
                class: "input-section",
                ValidatedInput {
                    value: state().fields.email,
                    placeholder: "Email".to_string(),
                    input_type: InputType::Email,
                    input_class: email_validation_class(&email_validation).to_string(),
                    input_style: email_validation_style(&email_validation).to_string(),
                    disabled: state().is_submitting(),
                    on_change: move |data: String| {
                        dispatch.call(ContactAction::SetEmail(data));
                    }
                }
                EmailValidationFeedback {
                    validation: email_validation.clone()
                }
            }

            div {
                class: "input-section",
                ValidatedInput {
                    value: state().fields.phone_number,
                    placeholder: "Phone Number".to_string(),
                    input_type: InputType::Tel,
                    input_class: "input-field".to_string(),
                    input_style: "".to_string(),
                    disabled: state().is_submitting(),
                    on_change: move |data: String| {
                        dispatch.call(ContactAction::SetPhoneNumber(data));
                    }
                }
            }

            div {
                class: "input-section",
                ValidatedTextArea {
                    value: state().fields.message,
                    placeholder: "Send a message to get started.".to_string(),
                    input_class: "input-field input-message".to_string(),
                    disabled: state().is_submitting(),
                    on_change: move |data: String| {
                        dispatch.call(ContactAction::SetMessage(data));
                    }
                }
            }

            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    disabled: {
                        let current_state = state();
                        current_state.is_submitting() || !validate_contact_complete(&current_state)
                    },
                    onclick: move |_| {
                        let current_state = state();
                        if !current_state.can_submit() {
                            return;
                        }

                        let request = ContactRequest {
                            name: current_state.fields.name.trim().to_string(),
                            email: current_state.fields.email.trim().to_string(),
                            phone_number: current_state.fields.phone_number.trim().to_string(),
                            message: current_state.fields.message.trim().to_string(),
                        };

                        dispatch.call(ContactAction::SubmitStarted);

                        spawn(async move {
                            let client = RelayClient::new();
                            match client.submit(&request).await {
                                Ok(RelayOutcome::Accepted) => {
                                    console_info!("Relay accepted submission");
                                    dispatch.call(ContactAction::SubmitSucceeded);
                                }
                                Ok(RelayOutcome::Rejected { reason }) => {
                                    console_error!("Relay rejected submission: {}", reason);
                                    dispatch.call(ContactAction::SubmitFailed(reason));
                                }
                                Err(e) => {
                                    console_error!("Relay submission failed: {}", e);
                                    dispatch.call(ContactAction::SubmitFailed(
                                        GENERIC_FAILURE_MESSAGE.to_string(),
                                    ));
                                }
                            }
                        });
                    },
                    if state().is_submitting() {
                        "Submitting..."
                    } else {
                        "Submit"
                    }
                }
            }

            div {
                class: "form-info",
                if state().is_submitting() {
                    div {
                        class: "form-progress",
                        "Sending your message..."
                    }
                } else if !state().errors.is_empty() {
                    div {
                        class: "form-errors",
                        for error in state().errors {
                            div {
                                class: "form-error",
                                "✗ {error}"
                            }
                        }
                    }
                } else if let Some(validation_msg) = get_contact_validation_message(&state()) {
                    div {
                        class: "validation-error",
                        "⚠️ {validation_msg}"
                    }
                }
            }
        }
    }
}
