use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::contact::ToastNotice;

/// How long a toast stays on screen before dismissing itself.
const TOAST_DURATION_MS: u32 = 5000;

#[derive(Props, PartialEq, Clone)]
pub struct ToastProps {
    pub notice: ToastNotice,
    pub on_dismiss: EventHandler<()>,
}

/// Transient success notification pinned to the bottom-left corner.
/// Dismissible by click and auto-expiring; the owning state keys it by a
/// stable id so an identical notice is never queued twice.
#[component]
pub fn Toast(props: ToastProps) -> Element {
    let on_dismiss = props.on_dismiss;

    use_effect(move || {
        spawn(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            on_dismiss.call(());
        });
    });

    rsx! {
        div {
            class: "toast toast-success",
            role: "status",
            onclick: move |_| on_dismiss.call(()),
            span {
                class: "toast-message",
                "{props.notice.message}"
            }
            button {
                class: "toast-dismiss",
                "aria-label": "Dismiss notification",
                "✕"
            }
        }
    }
}
