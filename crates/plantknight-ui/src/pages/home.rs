//! Landing page

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use plantknight_core::paths;

#[component]
pub fn Home() -> impl IntoView {
    let navigate = use_navigate();
    let to_setup = navigate.clone();

    view! {
        <div class="home-page">
            <h1>"PlantKnight"</h1>
            <p>"Keep an eye on your plants' soil, light and temperature."</p>
            <div class="home-actions">
                <button
                    class="btn-primary"
                    on:click=move |_| navigate(paths::LOGIN, Default::default())
                >
                    "Check Plants"
                </button>
                <button
                    class="btn-secondary"
                    on:click=move |_| to_setup(paths::SETUP, Default::default())
                >
                    "Set Up"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_component_exists() {
        let _component = Home;
    }
}
