//! Alert box with the coordinate help line and the latest form message.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read-only: the app shell owns the message and passes it down as a signal.
//! Any string, including empty, is shown verbatim and doubles as the alert's
//! accessible label.

#[cfg(test)]
#[path = "message_box_test.rs"]
mod message_box_test;

use leptos::prelude::*;

use crate::components::controls::Role;

/// Static instructional line shown above every message.
pub const HELP_TEXT: &str = "help: Latitude is between -90 to 90, Longitude is between -180 to 180.";

pub const MESSAGE_LABEL: &str = "Message:";

/// Text content and accessibility attributes of a rendered message box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageBoxView {
    pub role: Role,
    pub accessible_name: String,
    pub help: &'static str,
    pub label: &'static str,
    pub text: String,
}

impl MessageBoxView {
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            role: Role::Alert,
            accessible_name: message.to_owned(),
            help: HELP_TEXT,
            label: MESSAGE_LABEL,
            text: message.to_owned(),
        }
    }
}

#[component]
pub fn MessageBox(#[prop(into)] message: Signal<String>) -> impl IntoView {
    let rendered = Memo::new(move |_| MessageBoxView::new(&message.get()));

    view! {
        <div
            class="message-box"
            role=move || rendered.with(|v| v.role.as_str())
            aria-label=move || rendered.with(|v| v.accessible_name.clone())
        >
            <p class="message-box__help">
                <small>{move || rendered.with(|v| v.help)}</small>
            </p>
            <hr class="message-box__rule"/>
            <p class="message-box__label">
                <b>{move || rendered.with(|v| v.label)}</b>
            </p>
            <div class="message-box__text">{move || rendered.with(|v| v.text.clone())}</div>
        </div>
    }
}
