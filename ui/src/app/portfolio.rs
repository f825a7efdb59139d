use dioxus::prelude::*;

use crate::components::{ContactForm, Footer};
use crate::contact::{ContactAction, ContactState};

const CONTACT_FORM_CSS: Asset = asset!("/assets/styling/contact_form.css");

#[component]
pub fn Portfolio() -> Element {
    // One state entity per page load; discarded on navigation away.
    let mut state = use_signal(ContactState::default);

    // Dispatch function for actions - in-place reduction preserves Dioxus
    // Signal reactivity.
    let dispatch = EventHandler::new(move |action: ContactAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: CONTACT_FORM_CSS }

        div {
            class: "portfolio-container",

            section {
                class: "contact-section",
                id: "contact",
                ContactForm {
                    state: state,
                    dispatch: dispatch
                }
            }

            Footer {}
        }
    }
}
