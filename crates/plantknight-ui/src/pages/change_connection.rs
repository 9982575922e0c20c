//! Change-connection page: pair the account with a different sensor.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use plantknight_core::form::{ChangeConnectionForm, SubmitGuard, SubmitState};
use plantknight_core::paths;

use crate::components::SubmitStatus;
use crate::state::{submit_form, use_app_context};

#[component]
pub fn ChangeConnection() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let device_id = RwSignal::new(String::new());
    let status = RwSignal::new(SubmitState::Idle);
    let guard = SubmitGuard::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = ChangeConnectionForm {
            device_id: device_id.get_untracked(),
        };
        let services = ctx.services();
        submit_form(&guard, status, navigate.clone(), async move {
            services.change_connection(&form).await
        });
    };

    view! {
        <div class="change-connection-page">
            <h1>"Change Connection"</h1>
            <p>"Enter the connection id printed on the sensor you want to use."</p>
            <form class="plant-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="device-id">"Connection Id"</label>
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
                        {move || if status.get().is_submitting() { "Updating..." } else { "Update Connection" }}
                    </button>
                </div>
            </form>
            <SubmitStatus state=status />
        </div>
    }
}
