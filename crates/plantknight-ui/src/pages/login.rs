//! Login page

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use plantknight_core::form::{LoginForm, SubmitGuard, SubmitState};
use plantknight_core::paths;

use crate::components::SubmitStatus;
use crate::state::{submit_form, use_app_context};

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(SubmitState::Idle);
    let guard = SubmitGuard::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let ctx = ctx.clone();
        let services = ctx.services();
        submit_form(&guard, status, navigate.clone(), async move {
            let outcome = services.login(&form).await;
            if outcome.success {
                ctx.refresh_user();
            }
            outcome
        });
    };

    view! {
        <div class="login-page">
            <h1>"Log In"</h1>
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
                        autocomplete="current-password"
                        on:input=move |ev| password.set(event_target_value(&ev))
                        prop:value=move || password.get()
                    />
                </div>
                <button
                    type="submit"
                    class="btn-primary"
                    disabled=move || status.get().is_submitting()
                >
                    {move || if status.get().is_submitting() { "Logging in..." } else { "Log In" }}
                </button>
            </form>
            <SubmitStatus state=status />
            <p class="form-footer">
                "No account yet? " <a href=paths::SETUP>"Set one up"</a>
            </p>
        </div>
    }
}
