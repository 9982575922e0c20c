//! Fallback page for unknown routes

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use plantknight_core::paths;

/// Line naming the path that matched no route.
#[must_use]
pub fn unknown_path_message(path: &str) -> String {
    match path.trim() {
        "" | "/" => "Nothing is planted here.".to_string(),
        path => format!("Nothing is planted at {path}."),
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    let message = move || location.pathname.with(|path| unknown_path_message(path));

    view! {
        <div class="not-found-page">
            <h1>"This plant hasn't sprouted"</h1>
            <p>{message}</p>
            <div class="form-actions">
                <a class="btn-primary" href=paths::PLANTS>"Back to my plants"</a>
                <a class="btn-secondary" href=paths::HOME>"Home"</a>
            </div>
        </div>
    }
}
