//! Plant list page

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use plantknight_core::paths;
use plantknight_core::{PlantList, ResourceState};

use crate::components::{LoadingIndicator, PlantListView, StatusMessage};
use crate::state::{use_app_context, use_remote_resource};

/// Banner shown above the built-in sample list.
pub const SAMPLE_NOTICE: &str = "Showing sample plants.";

#[component]
pub fn Plants() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let services = ctx.services();
    let list = use_remote_resource(
        || (),
        move |()| {
            let services = services.clone();
            async move { services.load_plant_list().await }
        },
    );
    let state = list.state;

    let plants = Signal::derive(move || {
        state.with(|s| s.value().map(|l| l.plants.clone()).unwrap_or_default())
    });
    let is_sample = move || state.with(|s| s.value().is_some_and(|l: &PlantList| l.sample));

    let to_add = navigate.clone();
    let to_remove = navigate.clone();
    let to_connection = navigate;

    view! {
        <div class="plants-page">
            <header class="plants-header">
                <h1>"Your Plants"</h1>
                <div class="header-actions">
                    <button
                        class="btn-primary"
                        on:click=move |_| to_add(paths::ADD_PLANT, Default::default())
                    >
                        "Add Plant"
                    </button>
                    <button
                        class="btn-secondary"
                        on:click=move |_| to_remove(paths::REMOVE_PLANT, Default::default())
                    >
                        "Remove Plant"
                    </button>
                    <button
                        class="btn-secondary"
                        on:click=move |_| to_connection(paths::CHANGE_CONNECTION, Default::default())
                    >
                        "Change Connection"
                    </button>
                </div>
            </header>

            {move || state.with(|s| s.error().map(|message| view! {
                <StatusMessage message=message.to_string() is_error=true />
            }))}
            <Show when=is_sample>
                <p class="sample-notice">{SAMPLE_NOTICE}</p>
            </Show>

            {move || match state.get() {
                ResourceState::Idle | ResourceState::Loading => {
                    view! { <LoadingIndicator label="Loading plants..." /> }.into_any()
                }
                _ if plants.with(Vec::is_empty) => {
                    view! { <p class="empty-list">"No plants yet"</p> }.into_any()
                }
                _ => view! { <PlantListView plants=plants /> }.into_any(),
            }}
        </div>
    }
}
