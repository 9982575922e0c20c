//! Plant detail page
//!
//! Fetches the latest reading for the `:plant_id` route parameter and
//! re-fetches whenever the parameter changes. A care analysis can be
//! requested on demand.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use leptos_router::params::ParamsMap;
use plantknight_core::ResourceState;
use plantknight_core::models::{CareReport, PlantReading, UNKNOWN_PLANT};
use plantknight_core::paths;

use crate::components::{LoadingIndicator, ReadingRow, StatusMessage};
use crate::error::{Result, UiError};
use crate::state::{RemoteResource, use_app_context, use_remote_resource};

/// Route parameter holding the plant identifier.
pub const PLANT_ID_PARAM: &str = "plant_id";

/// The non-blank plant identifier from the route.
///
/// # Errors
/// Returns `MissingRouteParam` when the parameter is absent or blank.
pub fn plant_id_from(params: &ParamsMap) -> Result<String> {
    params
        .get(PLANT_ID_PARAM)
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or(UiError::MissingRouteParam(PLANT_ID_PARAM))
}

#[component]
pub fn Plant() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();

    let services = ctx.services();
    let reading = use_remote_resource(
        move || params.with(plant_id_from),
        move |plant_id: Result<String>| {
            let services = services.clone();
            async move {
                match plant_id {
                    Ok(id) => services.load_plant_detail(&id).await,
                    Err(e) => ResourceState::failed_with(e.to_string(), None),
                }
            }
        },
    );

    let care = RemoteResource::<CareReport>::new();
    // A report belongs to one plant; drop it when the route moves on.
    let care_reset = care.clone();
    Effect::new(move |_| {
        params.track();
        care_reset.replace(ResourceState::Idle);
    });

    let services = ctx.services();
    let care_request = care.clone();
    let request_care = move |_| {
        let Ok(id) = params.with_untracked(plant_id_from) else {
            return;
        };
        let services = services.clone();
        care_request.load(async move { services.load_care_report(&id).await });
    };

    let reading_state = reading.state;
    let care_state = care.state;
    view! {
        <div class="plant-page">
            <a class="back-link" href=paths::PLANTS>"← All plants"</a>
            {move || {
                let state = reading_state.get();
                view! {
                    {state.is_loading().then(|| view! {
                        <LoadingIndicator label="Loading plant data..." />
                    })}
                    {state.error().map(|message| view! {
                        <StatusMessage message=message.to_string() is_error=true />
                    })}
                    {state.value().cloned().map(|reading| view! { <ReadingPanel reading=reading /> })}
                }
            }}
            <section class="care-report">
                <button
                    class="btn-secondary"
                    on:click=request_care
                    disabled=move || care_state.get().is_loading()
                >
                    {move || if care_state.get().is_loading() { "Analyzing..." } else { "Get Care Report" }}
                </button>
                {move || {
                    let state = care_state.get();
                    view! {
                        {state.error().map(|message| view! {
                            <StatusMessage message=message.to_string() is_error=true />
                        })}
                        {state.value().cloned().map(|report| view! { <CarePanel report=report /> })}
                    }
                }}
            </section>
        </div>
    }
}

#[component]
fn ReadingPanel(reading: PlantReading) -> impl IntoView {
    // A paired sensor without a plant record can be named from here.
    let unnamed = reading.name == UNKNOWN_PLANT;
    let name_link = paths::add_plant_for(&reading.id);

    view! {
        <div class="plant-detail">
            <h1>{reading.name.clone()}</h1>
            <p class="plant-species">{reading.species.clone()}</p>
            <ReadingRow label="Soil Moisture" value=reading.moisture_display() />
            <ReadingRow label="Light" value=reading.light_display() />
            <ReadingRow label="Temperature" value=reading.temperature_display() />
            <ReadingRow label="Soil pH" value=reading.ph_display() />
            <ReadingRow label="Last Updated" value=reading.timestamp_display() />
            {unnamed.then(|| view! {
                <a class="btn-primary" href=name_link>"Name this plant"</a>
            })}
        </div>
    }
}

#[component]
fn CarePanel(report: CareReport) -> impl IntoView {
    let report = report.clamped();
    view! {
        <div class="care-panel">
            <ReadingRow label="Temperature score" value=report.temperature_score.to_string() />
            <p>{report.recommendations.temperature.clone()}</p>
            <ReadingRow label="Moisture score" value=report.moisture_score.to_string() />
            <p>{report.recommendations.moisture.clone()}</p>
            <ReadingRow label="Light score" value=report.light_levels_score.to_string() />
            <p>{report.recommendations.light_levels.clone()}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_with(id: &str) -> ParamsMap {
        let mut params = ParamsMap::new();
        params.insert(PLANT_ID_PARAM, id.to_string());
        params
    }

    #[test]
    fn test_plant_id_from_params() {
        assert_eq!(plant_id_from(&params_with("device_1")), Ok("device_1".to_string()));
    }

    #[test]
    fn test_blank_plant_id_is_missing() {
        assert_eq!(
            plant_id_from(&params_with("  ")),
            Err(UiError::MissingRouteParam(PLANT_ID_PARAM))
        );
        assert_eq!(
            plant_id_from(&ParamsMap::new()),
            Err(UiError::MissingRouteParam(PLANT_ID_PARAM))
        );
    }

    #[test]
    fn test_plant_component_exists() {
        let _component = Plant;
    }
}
