//! Main application component
//!
//! Loads settings, provides the shared [`AppContext`] and lays out the
//! header, the routed page and the footer.

use leptos::prelude::*;
use leptos_router::components::Router;
use plantknight_core::{AppConfig, ResultExt};
use wasm_bindgen_futures::spawn_local;

use crate::router::{AppRoutes, routes};
use crate::state::{AppContext, load_config, use_app_context};

/// Header text for the API reachability check.
#[must_use]
pub fn api_status_label(status: Option<&Option<String>>) -> &'static str {
    match status {
        None => "API: checking...",
        Some(Some(_)) => "API: online",
        Some(None) => "API: offline",
    }
}

/// Root component
#[component]
pub fn App() -> impl IntoView {
    let config = load_config().or_default_logged("loading plantknight.toml", AppConfig::default());
    tracing::info!(api = %config.api_base_url, "starting PlantKnight");
    provide_context(AppContext::new(config));

    view! {
        <Router>
            <div class="app-container">
                <AppHeader />
                <main class="app-main">
                    <AppRoutes />
                </main>
                <footer class="app-footer">
                    <p>"PlantKnight"</p>
                </footer>
            </div>
        </Router>
    }
}

#[component]
fn AppHeader() -> impl IntoView {
    let ctx = use_app_context();
    let user = ctx.current_user();

    // None until the API answers
    let api_status = RwSignal::new(None::<Option<String>>);
    let services = ctx.services();
    spawn_local(async move {
        let greeting = services.api_status().await;
        api_status.try_set(Some(greeting));
    });

    // The link itself navigates home; the handler only drops the session.
    let on_logout = move |_: leptos::ev::MouseEvent| ctx.logout();

    view! {
        <header class="app-header">
            <h1>"PlantKnight"</h1>
            <nav class="app-nav">
                <a href=routes::HOME>"Home"</a>
                <a href=routes::PLANTS>"Plants"</a>
                <Show
                    when=move || user.with(Option::is_some)
                    fallback=|| view! { <a href=routes::LOGIN>"Log in"</a> }
                >
                    <a href=routes::HOME on:click=on_logout.clone()>"Log out"</a>
                </Show>
            </nav>
            <span class="current-user">{move || user.get().unwrap_or_default()}</span>
            <span class="api-status" title=move || api_status.get().flatten().unwrap_or_default()>
                {move || api_status.with(|s| api_status_label(s.as_ref()))}
            </span>
        </header>
    }
}
