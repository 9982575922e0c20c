//! Clickable plant list

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use plantknight_core::models::PlantSummary;
use plantknight_core::paths;

/// Count line above the list.
#[must_use]
pub fn plant_count_label(count: usize) -> String {
    match count {
        1 => "1 plant".to_string(),
        n => format!("{n} plants"),
    }
}

/// The list of plants; each entry opens its detail page.
#[component]
pub fn PlantListView(#[prop(into)] plants: Signal<Vec<PlantSummary>>) -> impl IntoView {
    view! {
        <div class="plant-list-container">
            <div class="plant-count">{move || plant_count_label(plants.get().len())}</div>
            <ul class="plant-list">
                <For
                    each=move || plants.get()
                    key=|plant| plant.id.clone()
                    children=move |plant| view! { <PlantItem plant=plant /> }
                />
            </ul>
        </div>
    }
}

#[component]
fn PlantItem(plant: PlantSummary) -> impl IntoView {
    let navigate = use_navigate();
    let target = paths::plant(&plant.id);

    view! {
        <li class="plant-item" on:click=move |_| navigate(&target, Default::default())>
            <h3 class="plant-name">{plant.name.clone()}</h3>
            <p class="plant-species">{plant.species.clone()}</p>
            <span class=plant.status.css_class()>{plant.status.to_string()}</span>
        </li>
    }
}
