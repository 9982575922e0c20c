//! Loading placeholder

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator(#[prop(default = "Loading...")] label: &'static str) -> impl IntoView {
    view! { <p class="loading-indicator">{label}</p> }
}
