//! Behavioral tests for the remove-plant page

use serde_json::json;

use super::support::{RecordingTransport, services};
use crate::api::{HttpMethod, endpoints};
use crate::resource::ResourceState;

fn two_plants() -> serde_json::Value {
    json!({ "plants": [
        { "device_id": "keep", "plant_name": "Basil", "species": "Ocimum basilicum" },
        { "device_id": "drop", "plant_name": "Fig", "species": "Ficus lyrata" }
    ]})
}

#[tokio::test]
async fn given_selected_plant_when_removed_then_list_is_refetched_without_it() {
    let transport = RecordingTransport::new()
        .respond(endpoints::USER_PLANTS, 200, two_plants())
        .respond(
            endpoints::USER_PLANTS,
            200,
            json!({ "plants": [
                { "device_id": "keep", "plant_name": "Basil", "species": "Ocimum basilicum" }
            ]}),
        )
        .respond(
            endpoints::REMOVE_PLANT,
            200,
            json!({ "message": "Plant removed successfully" }),
        );
    let services = services(transport);
    services.session().set_user("ana", None).ok();

    let before = services.load_removable_plants().await;
    assert_eq!(before.value().map(Vec::len), Some(2));

    let removal = services.remove_plant("drop").await;

    let requests = services.api().transport().requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[1].method, HttpMethod::Post);
    assert_eq!(requests[1].path, endpoints::REMOVE_PLANT);
    assert_eq!(
        requests[1].body,
        Some(json!({ "username": "ana", "device_id": "drop" }))
    );
    assert_eq!(requests[2].path, endpoints::USER_PLANTS);

    assert!(removal.outcome.success);
    assert_eq!(
        removal.outcome.message,
        "Plant removed successfully! Updating list..."
    );
    let Some(ResourceState::Ready(remaining)) = removal.refreshed else {
        panic!("expected refreshed list");
    };
    assert!(remaining.iter().all(|p| p.id != "drop"));
    assert_eq!(remaining.len(), 1);
}

#[tokio::test]
async fn given_no_selection_when_remove_clicked_then_no_request_sent() {
    let services = services(RecordingTransport::new());

    let removal = services.remove_plant("").await;

    assert!(!removal.outcome.success);
    assert_eq!(removal.outcome.message, "Please select a plant to remove.");
    assert!(removal.refreshed.is_none());
    assert_eq!(services.api().transport().request_count(), 0);
}

#[tokio::test]
async fn given_unreachable_api_when_removing_then_server_hint_shown() {
    let transport = RecordingTransport::new().fail(endpoints::REMOVE_PLANT, "Failed to fetch");
    let services = services(transport);

    let removal = services.remove_plant("drop").await;

    assert_eq!(
        removal.outcome.message,
        "Error: Cannot connect to API server. Please make sure the server is running."
    );
    assert!(removal.refreshed.is_none());
}

#[tokio::test]
async fn given_server_rejection_when_removing_then_message_is_visible() {
    let transport = RecordingTransport::new().respond(
        endpoints::REMOVE_PLANT,
        404,
        json!({ "message": "Device not found for user" }),
    );
    let services = services(transport);

    let removal = services.remove_plant("drop").await;

    assert!(!removal.outcome.success);
    assert_eq!(
        removal.outcome.message,
        "Error removing plant: Device not found for user"
    );
    assert_eq!(services.api().transport().request_count(), 1);
}

#[tokio::test]
async fn given_unknown_user_when_removable_plants_load_then_list_is_empty() {
    let transport = RecordingTransport::new().respond(
        endpoints::USER_PLANTS,
        404,
        json!({ "message": "User not found" }),
    );
    let services = services(transport);

    let state = services.load_removable_plants().await;

    assert_eq!(state, ResourceState::Ready(Vec::new()));
}

#[tokio::test]
async fn given_server_error_when_removable_plants_load_then_error_and_empty_list() {
    let transport = RecordingTransport::new().respond(endpoints::USER_PLANTS, 500, json!({}));
    let services = services(transport);

    let state = services.load_removable_plants().await;

    assert_eq!(state.error(), Some("Error loading plants. Please try again."));
    assert_eq!(state.value().map(Vec::len), Some(0));
}
