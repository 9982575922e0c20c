//! Account setup page: username, password and the first sensor's
//! connection id.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use plantknight_core::form::{SetupForm, SubmitGuard, SubmitState};
use plantknight_core::paths;

use crate::components::SubmitStatus;
use crate::state::{submit_form, use_app_context};

#[component]
pub fn Setup() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let device_id = RwSignal::new(String::new());
    let status = RwSignal::new(SubmitState::Idle);
    let guard = SubmitGuard::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = SetupForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
            device_id: device_id.get_untracked(),
        };
        let services = ctx.services();
        submit_form(&guard, status, navigate.clone(), async move {
            services.register(&form).await
        });
    };

    view! {
        <div class="setup-page">
            <h1>"Set Up Your Account"</h1>
            <form class="plant-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        required=true
                        autocomplete="username"
                        on:input=move |ev| username.set(event_target_value(&ev))
                        prop:value=move || username.get()
                    />
                </div>
                <div class="form-group">
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        required=true
                        autocomplete="new-password"
                        on:input=move |ev| password.set(event_target_value(&ev))
                        prop:value=move || password.get()
                    />
                </div>
                <div class="form-group">
                    <label for="device-id">"Connection Id"</label>
                    <input
                        id="device-id"
                        type="text"
                        required=true
                        placeholder="Printed on your sensor"
                        on:input=move |ev| device_id.set(event_target_value(&ev))
                        prop:value=move || device_id.get()
                    />
                </div>
                <button
                    type="submit"
                    class="btn-primary"
                    disabled=move || status.get().is_submitting()
                >
                    {move || if status.get().is_submitting() { "Creating account..." } else { "Create Account" }}
                </button>
            </form>
            <SubmitStatus state=status />
            <p class="form-footer">
                "Already set up? " <a href=paths::LOGIN>"Log in"</a>
            </p>
        </div>
    }
}
