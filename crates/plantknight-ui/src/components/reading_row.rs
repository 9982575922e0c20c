//! One labelled reading on the plant detail page

use leptos::prelude::*;

#[component]
pub fn ReadingRow(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="reading-row">
            <span class="reading-label">{label}</span>
            <span class="reading-value">{value}</span>
        </div>
    }
}
