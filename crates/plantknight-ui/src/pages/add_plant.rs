//! Add-plant page
//!
//! `?device_id=` prefills the device field once, so the plant list can hand
//! over a sensor it already knows about.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use plantknight_core::form::{AddPlantForm, SubmitGuard, SubmitState};
use plantknight_core::paths;

use crate::components::SubmitStatus;
use crate::state::{submit_form, use_app_context};

/// Query parameter carrying the device id handed over by the list page.
pub const DEVICE_ID_PARAM: &str = "device_id";

#[component]
pub fn AddPlant() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let query = use_query_map();

    let prefill = query
        .with_untracked(|q| q.get(DEVICE_ID_PARAM))
        .unwrap_or_default();

    let plant_name = RwSignal::new(String::new());
    let species = RwSignal::new(String::new());
    let device_id = RwSignal::new(prefill);
    let status = RwSignal::new(SubmitState::Idle);
    let guard = SubmitGuard::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = AddPlantForm {
            plant_name: plant_name.get_untracked(),
            species: species.get_untracked(),
            device_id: device_id.get_untracked(),
        };
        let services = ctx.services();
        submit_form(&guard, status, navigate.clone(), async move {
            services.add_plant(&form).await
        });
    };

    view! {
        <div class="add-plant-page">
            <h1>"Add a Plant"</h1>
            <form class="plant-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="plant-name">"Name"</label>
                    <input
                        id="plant-name"
                        type="text"
                        required=true
                        placeholder="e.g. Kitchen Basil"
                        on:input=move |ev| plant_name.set(event_target_value(&ev))
                        prop:value=move || plant_name.get()
                    />
                </div>
                <div class="form-group">
                    <label for="species">"Species"</label>
                    <input
                        id="species"
                        type="text"
                        required=true
                        placeholder="e.g. Ocimum basilicum"
                        on:input=move |ev| species.set(event_target_value(&ev))
                        prop:value=move || species.get()
                    />
                </div>
                <div class="form-group">
                    <label for="device-id">"Device Id"</label>
                    <input
                        id="device-id"
                        type="text"
                        required=true
                        on:input=move |ev| device_id.set(event_target_value(&ev))
                        prop:value=move || device_id.get()
                    />
                </div>
                <div class="form-actions">
                    <a class="btn-secondary" href=paths::PLANTS>"Cancel"</a>
                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || status.get().is_submitting()
                    >
                        {move || if status.get().is_submitting() { "Adding..." } else { "Add Plant" }}
                    </button>
                </div>
            </form>
            <SubmitStatus state=status />
        </div>
    }
}
