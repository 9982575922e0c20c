//! Remove-plant page
//!
//! Pick one of the account's plants, confirm, and the list is fetched again
//! so the removed plant disappears. Both buttons stay disabled while the
//! request runs. A success message clears itself after the configured delay;
//! errors stay until the next attempt.

use leptos::prelude::*;
use plantknight_core::form::{FormOutcome, SubmitGuard};
use plantknight_core::models::PlantSummary;
use plantknight_core::paths;
use wasm_bindgen_futures::spawn_local;

use crate::components::{ConfirmDialog, LoadingIndicator, StatusMessage};
use crate::state::{
    AppContext, RemoteResource, clear_after, use_app_context, use_remote_resource,
};

/// The plant in `plants` whose id is `selected`.
#[must_use]
pub fn find_selected<'a>(plants: &'a [PlantSummary], selected: &str) -> Option<&'a PlantSummary> {
    plants.iter().find(|p| p.id == selected)
}

/// Text of the remove button.
#[must_use]
pub const fn remove_button_label(removing: bool) -> &'static str {
    if removing { "Removing plant..." } else { "Remove Plant" }
}

/// Only confirmations fade; an error stays until the user acts on it.
#[must_use]
pub const fn should_auto_clear(outcome: &FormOutcome) -> bool {
    outcome.success
}

#[component]
pub fn RemovePlant() -> impl IntoView {
    let ctx = use_app_context();
    let clear_ms = ctx.config().status_clear_ms;

    let services = ctx.services();
    let list = use_remote_resource(
        || (),
        move |()| {
            let services = services.clone();
            async move { services.load_removable_plants().await }
        },
    );
    let state = list.state;

    let selected = RwSignal::new(String::new());
    let confirming = RwSignal::new(false);
    let removing = RwSignal::new(false);
    let message = RwSignal::new(None::<FormOutcome>);
    let guard = SubmitGuard::new();

    let plants = Memo::new(move |_| state.with(|s| s.value().cloned().unwrap_or_default()));
    let selected_plant = Memo::new(move |_| {
        let id = selected.get();
        plants.with(|list| find_selected(list, &id).cloned())
    });

    let remove = Callback::new(move |()| {
        let signals = RemovalSignals {
            selected,
            confirming,
            removing,
            message,
        };
        remove_selected(&guard, &ctx, &list, signals, clear_ms);
    });

    // A blank selection goes straight to the service, which refuses it
    // without a request; anything else asks first.
    let on_remove_click = move |_| {
        if removing.get_untracked() {
            return;
        }
        if selected.with_untracked(|id| id.trim().is_empty()) {
            remove.run(());
        } else {
            confirming.set(true);
        }
    };
    // The dialog stays open, disabled, until the removal settles.
    let on_confirm = Callback::new(move |()| remove.run(()));
    let on_cancel = Callback::new(move |()| {
        if !removing.get_untracked() {
            confirming.set(false);
        }
    });

    view! {
        <div class="remove-plant-page">
            <a class="back-link" href=paths::PLANTS>"← All plants"</a>
            <h1>"Remove a Plant"</h1>

            {move || state.with(|s| s.error().map(|m| view! {
                <StatusMessage message=m.to_string() is_error=true />
            }))}

            {move || if state.with(|s| s.is_loading()) {
                view! { <LoadingIndicator label="Loading plants..." /> }.into_any()
            } else if plants.with(Vec::is_empty) {
                view! { <p class="empty-list">"No plants to remove"</p> }.into_any()
            } else {
                view! {
                    <div class="form-group">
                        <label for="plant-select">"Plant"</label>
                        <select
                            id="plant-select"
                            on:change=move |ev| selected.set(event_target_value(&ev))
                            prop:value=move || selected.get()
                        >
                            <option value="">"Select a plant"</option>
                            <For
                                each=move || plants.get()
                                key=|plant| plant.id.clone()
                                children=move |plant| view! {
                                    <option value=plant.id.clone()>{plant.picker_label()}</option>
                                }
                            />
                        </select>
                    </div>
                }.into_any()
            }}

            {move || selected_plant.get().map(|plant| view! {
                <div class="plant-detail-panel">
                    <h2>{plant.name.clone()}</h2>
                    <p>{format!("Species: {}", plant.species)}</p>
                    <p>{format!("Device: {}", plant.device_id.clone().unwrap_or_else(|| plant.id.clone()))}</p>
                    <p class=plant.status.css_class()>{plant.status.to_string()}</p>
                </div>
            })}

            <button
                class="btn-danger"
                on:click=on_remove_click
                disabled=move || removing.get()
            >
                {move || remove_button_label(removing.get())}
            </button>

            {move || message.get().map(|outcome| view! {
                <StatusMessage message=outcome.message is_error=!outcome.success />
            })}

            <Show when=move || confirming.get()>
                <ConfirmDialog
                    title="Remove plant?"
                    message=selected_plant
                        .get_untracked()
                        .map(|p| format!("{} will be unpaired from your account.", p.name))
                        .unwrap_or_default()
                    confirm_label="Remove"
                    busy=removing
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            </Show>
        </div>
    }
}

#[derive(Clone, Copy)]
struct RemovalSignals {
    selected: RwSignal<String>,
    confirming: RwSignal<bool>,
    removing: RwSignal<bool>,
    message: RwSignal<Option<FormOutcome>>,
}

fn remove_selected(
    guard: &SubmitGuard,
    ctx: &AppContext,
    list: &RemoteResource<Vec<PlantSummary>>,
    signals: RemovalSignals,
    clear_ms: u32,
) {
    let Some(ticket) = guard.try_begin() else {
        tracing::debug!("removal already in flight, ignoring");
        return;
    };
    let RemovalSignals {
        selected,
        confirming,
        removing,
        message,
    } = signals;
    let device_id = selected.get_untracked();
    let services = ctx.services();
    let list = list.clone();
    removing.set(true);
    message.set(None);

    spawn_local(async move {
        let removal = services.remove_plant(&device_id).await;
        drop(ticket);
        removing.try_set(false);
        confirming.try_set(false);

        if let Some(refreshed) = removal.refreshed {
            list.replace(refreshed);
            selected.try_set(String::new());
        }
        let auto_clear = should_auto_clear(&removal.outcome);
        if message.try_set(Some(removal.outcome)).is_none() && auto_clear {
            clear_after(message, clear_ms);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_selected() {
        let plants = vec![
            PlantSummary::new("a", "Basil"),
            PlantSummary::new("b", "Fig"),
        ];
        assert_eq!(find_selected(&plants, "b").map(|p| p.name.as_str()), Some("Fig"));
        assert!(find_selected(&plants, "").is_none());
    }

    #[test]
    fn test_remove_button_label_while_removing() {
        assert_eq!(remove_button_label(false), "Remove Plant");
        assert_eq!(remove_button_label(true), "Removing plant...");
    }

    #[test]
    fn test_only_success_auto_clears() {
        assert!(should_auto_clear(&FormOutcome::success("Plant removed successfully!")));
        assert!(!should_auto_clear(&FormOutcome::failure("Error removing plant: gone")));
    }

    #[test]
    fn test_remove_plant_component_exists() {
        let _component = RemovePlant;
    }
}
