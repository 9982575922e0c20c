//! Success/error banners

use leptos::prelude::*;
use plantknight_core::form::SubmitState;

/// CSS class for a message of the given outcome.
#[must_use]
pub const fn status_class(is_error: bool) -> &'static str {
    if is_error {
        "status-message error"
    } else {
        "status-message success"
    }
}

/// A message styled as success or error.
#[component]
pub fn StatusMessage(#[prop(into)] message: String, is_error: bool) -> impl IntoView {
    view! {
        <div class=status_class(is_error) role="status">
            {message}
        </div>
    }
}

/// Renders the message of a finished submission, nothing otherwise.
#[component]
pub fn SubmitStatus(state: RwSignal<SubmitState>) -> impl IntoView {
    move || {
        let current = state.get();
        match current {
            SubmitState::Succeeded(_) | SubmitState::Failed(_) => Some(view! {
                <StatusMessage message=current.message().to_string() is_error=current.is_failure() />
            }),
            SubmitState::Idle | SubmitState::Submitting => None,
        }
    }
}
