//! Behavioral tests for form submissions

use serde_json::json;

use super::support::{RecordingTransport, services};
use crate::api::{HttpMethod, PlantApi, endpoints};
use crate::config::AppConfig;
use crate::form::{AddPlantForm, ChangeConnectionForm, LoginForm, Redirect, SetupForm};
use crate::paths;
use crate::services::Services;
use crate::session::{MemoryStore, Session, SessionStore, USER_DATA_KEY};

fn login_form() -> LoginForm {
    LoginForm {
        username: "ana".into(),
        password: "hunter2".into(),
    }
}

// ============================================================================
// LOGIN
// ============================================================================

#[tokio::test]
async fn given_complete_login_form_when_submitted_then_one_post_with_credentials() {
    let transport = RecordingTransport::new().respond(
        endpoints::LOGIN,
        200,
        json!({ "message": "{'username': 'ana', 'devices': []}" }),
    );
    let services = services(transport);

    let outcome = services.login(&login_form()).await;

    let requests = services.api().transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].path, endpoints::LOGIN);
    assert_eq!(
        requests[0].body,
        Some(json!({ "username": "ana", "password": "hunter2" }))
    );
    assert!(outcome.success);
    assert_eq!(outcome.redirect, Some(Redirect::immediate(paths::PLANTS)));
}

#[tokio::test]
async fn given_successful_login_when_done_then_session_holds_username_and_blob() {
    let transport = RecordingTransport::new().respond(
        endpoints::LOGIN,
        200,
        json!({ "message": "{'username': 'ana'}" }),
    );
    let store = MemoryStore::new();
    let services = Services::new(
        PlantApi::new(transport),
        Session::new(store.clone()),
        AppConfig::default(),
    );

    services.login(&login_form()).await;

    assert_eq!(services.session().username().as_deref(), Some("ana"));
    assert_eq!(
        store.get(USER_DATA_KEY).as_deref(),
        Some("{'username': 'ana'}")
    );
}

#[tokio::test]
async fn given_bad_credentials_when_login_then_server_message_shown_and_no_redirect() {
    let transport = RecordingTransport::new().respond(
        endpoints::LOGIN,
        401,
        json!({ "message": "Invalid username or password" }),
    );
    let services = services(transport);

    let outcome = services.login(&login_form()).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Invalid username or password");
    assert_eq!(outcome.redirect, None);
    assert_eq!(services.session().username(), None);
}

#[tokio::test]
async fn given_error_without_message_when_login_then_generic_failure() {
    let transport = RecordingTransport::new().respond(endpoints::LOGIN, 500, json!({}));
    let services = services(transport);

    let outcome = services.login(&login_form()).await;

    assert_eq!(outcome.message, "Login failed");
}

#[tokio::test]
async fn given_unreachable_api_when_login_then_network_error_shown() {
    let transport = RecordingTransport::new().fail(endpoints::LOGIN, "Failed to fetch");
    let services = services(transport);

    let outcome = services.login(&login_form()).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Network error. Please try again.");
}

#[tokio::test]
async fn given_blank_password_when_login_then_no_request_is_sent() {
    let transport = RecordingTransport::new();
    let services = services(transport);

    let outcome = services
        .login(&LoginForm {
            username: "ana".into(),
            password: "   ".into(),
        })
        .await;

    assert_eq!(outcome.message, "Password is required");
    assert_eq!(services.api().transport().request_count(), 0);
}

// ============================================================================
// SETUP
// ============================================================================

#[tokio::test]
async fn given_setup_form_when_submitted_then_register_body_has_device() {
    let transport = RecordingTransport::new().respond(
        endpoints::REGISTER,
        201,
        json!({ "message": "User registered successfully" }),
    );
    let services = services(transport);

    let outcome = services
        .register(&SetupForm {
            username: " ana ".into(),
            password: "pw".into(),
            device_id: "a1b2c3d4".into(),
        })
        .await;

    let requests = services.api().transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].body,
        Some(json!({ "username": "ana", "password": "pw", "device_id": "a1b2c3d4" }))
    );
    assert!(outcome.success);
    assert_eq!(outcome.redirect, Some(Redirect::after(paths::LOGIN, 1500)));
}

#[tokio::test]
async fn given_taken_username_when_register_then_conflict_message_shown() {
    let transport = RecordingTransport::new().respond(
        endpoints::REGISTER,
        409,
        json!({ "message": "Username already exists" }),
    );
    let services = services(transport);

    let outcome = services
        .register(&SetupForm {
            username: "ana".into(),
            password: "pw".into(),
            device_id: "a1".into(),
        })
        .await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Username already exists");
}

// ============================================================================
// ADD PLANT
// ============================================================================

fn add_form() -> AddPlantForm {
    AddPlantForm {
        plant_name: "Basil".into(),
        species: "Ocimum basilicum".into(),
        device_id: "d-42".into(),
    }
}

#[tokio::test]
async fn given_logged_in_user_when_adding_plant_then_body_is_scoped_to_user() {
    let transport = RecordingTransport::new().respond(
        endpoints::ADD_PLANT,
        201,
        json!({ "message": "Plant added successfully", "device_id": "d-42" }),
    );
    let services = services(transport);
    services.session().set_user("ana", None).ok();

    let outcome = services.add_plant(&add_form()).await;

    let requests = services.api().transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].body,
        Some(json!({
            "username": "ana",
            "plant_name": "Basil",
            "species": "Ocimum basilicum",
            "device_id": "d-42"
        }))
    );
    assert_eq!(outcome.message, "Plant added successfully!");
    assert_eq!(outcome.redirect, Some(Redirect::after(paths::PLANTS, 1500)));
}

#[tokio::test]
async fn given_no_session_when_adding_plant_then_fallback_username_used() {
    let transport =
        RecordingTransport::new().respond(endpoints::ADD_PLANT, 201, json!({ "message": "ok" }));
    let services = services(transport);

    services.add_plant(&add_form()).await;

    let body = services.api().transport().requests()[0].body.clone();
    assert_eq!(body.and_then(|b| b.get("username").cloned()), Some(json!("testuser")));
}

#[tokio::test]
async fn given_server_error_when_adding_plant_then_error_message_visible() {
    let transport = RecordingTransport::new().respond(
        endpoints::ADD_PLANT,
        404,
        json!({ "message": "User not found" }),
    );
    let services = services(transport);

    let outcome = services.add_plant(&add_form()).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Error adding plant: User not found");
    assert_eq!(outcome.redirect, None);
}

#[tokio::test]
async fn given_network_failure_when_adding_plant_then_connection_hint_shown() {
    let transport = RecordingTransport::new().fail(endpoints::ADD_PLANT, "offline");
    let services = services(transport);

    let outcome = services.add_plant(&add_form()).await;

    assert_eq!(
        outcome.message,
        "Error adding plant. Please check your connection and try again."
    );
}

// ============================================================================
// CHANGE CONNECTION
// ============================================================================

#[tokio::test]
async fn given_new_device_when_changing_connection_then_link_request_sent() {
    let transport = RecordingTransport::new().respond(
        endpoints::LINK_DEVICE,
        200,
        json!({ "message": "Device linked" }),
    );
    let services = services(transport);

    let outcome = services
        .change_connection(&ChangeConnectionForm {
            device_id: "ffee0011".into(),
        })
        .await;

    let requests = services.api().transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, endpoints::LINK_DEVICE);
    assert_eq!(
        requests[0].body,
        Some(json!({ "username": "testuser", "device_id": "ffee0011" }))
    );
    assert_eq!(outcome.message, "Connection updated to ffee0011");
}

#[tokio::test]
async fn given_missing_endpoint_when_changing_connection_then_error_visible() {
    let services = services(RecordingTransport::new());

    let outcome = services
        .change_connection(&ChangeConnectionForm {
            device_id: "ffee0011".into(),
        })
        .await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Error updating connection: no route");
}
