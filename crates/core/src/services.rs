//! Page workflows.
//!
//! Each method runs one page interaction end to end (validation, request,
//! session bookkeeping, fallback substitution) and returns what the page
//! renders. The UI layer only moves the result into signals.

use crate::api::{PlantApi, Transport};
use crate::config::AppConfig;
use crate::error::Error;
use crate::form::{
    AddPlantForm, ChangeConnectionForm, FormOutcome, LoginForm, Redirect, SetupForm,
};
use crate::models::{
    AddPlantRequest, CareReport, LinkDeviceRequest, LoginRequest, PlantReading, PlantSummary,
    RegisterRequest, RemovePlantRequest, mock_plants, placeholder_reading,
};
use crate::paths;
use crate::resource::ResourceState;
use crate::result::ResultExt;
use crate::session::{Session, SessionStore};

/// Plants shown on the list page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantList {
    pub plants: Vec<PlantSummary>,
    /// True when `plants` is the built-in sample list.
    pub sample: bool,
}

impl PlantList {
    pub const fn live(plants: Vec<PlantSummary>) -> Self {
        Self {
            plants,
            sample: false,
        }
    }

    pub fn sample() -> Self {
        Self {
            plants: mock_plants(),
            sample: true,
        }
    }
}

/// What the remove page shows after a removal attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovalOutcome {
    pub outcome: FormOutcome,
    /// The re-fetched list; only present after a successful removal.
    pub refreshed: Option<ResourceState<Vec<PlantSummary>>>,
}

/// API client, session and settings bundled for the pages.
#[derive(Debug, Clone)]
pub struct Services<T, S> {
    api: PlantApi<T>,
    session: Session<S>,
    config: AppConfig,
}

impl<T: Transport, S: SessionStore> Services<T, S> {
    pub const fn new(api: PlantApi<T>, session: Session<S>, config: AppConfig) -> Self {
        Self {
            api,
            session,
            config,
        }
    }

    pub const fn api(&self) -> &PlantApi<T> {
        &self.api
    }

    pub const fn session(&self) -> &Session<S> {
        &self.session
    }

    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    fn username(&self) -> String {
        self.session.username_or(&self.config.fallback_username)
    }

    /// Login form submission.
    pub async fn login(&self, form: &LoginForm) -> FormOutcome {
        if let Err(e) = form.validate() {
            return FormOutcome::failure(e.to_string());
        }
        let request = LoginRequest {
            username: form.username.trim().to_string(),
            password: form.password.clone(),
        };

        match self.api.login(&request).await {
            Ok(user_blob) => {
                if let Err(e) = self.session.set_user(&request.username, Some(&user_blob)) {
                    tracing::warn!("could not store session: {e}");
                }
                tracing::info!(username = %request.username, "logged in");
                FormOutcome::success("Login successful!")
                    .with_redirect(Redirect::immediate(paths::PLANTS))
            }
            Err(e) if e.is_network() => {
                tracing::error!("login failed: {e}");
                FormOutcome::failure("Network error. Please try again.")
            }
            Err(e) => {
                tracing::warn!("login rejected: {e}");
                FormOutcome::failure(e.server_message().unwrap_or("Login failed"))
            }
        }
    }

    /// Account setup form submission.
    pub async fn register(&self, form: &SetupForm) -> FormOutcome {
        if let Err(e) = form.validate() {
            return FormOutcome::failure(e.to_string());
        }
        let request = RegisterRequest {
            username: form.username.trim().to_string(),
            password: form.password.clone(),
            device_id: form.device_id.trim().to_string(),
        };

        match self.api.register(&request).await {
            Ok(_) => {
                if let Err(e) = self.session.set_user(&request.username, None) {
                    tracing::warn!("could not store session: {e}");
                }
                FormOutcome::success("Account created! Redirecting to login...")
                    .with_redirect(Redirect::after(paths::LOGIN, self.config.redirect_delay_ms))
            }
            Err(e) if e.is_network() => {
                tracing::error!("registration failed: {e}");
                FormOutcome::failure("Network error. Please try again.")
            }
            Err(e) => {
                tracing::warn!("registration rejected: {e}");
                FormOutcome::failure(
                    e.server_message()
                        .unwrap_or("Registration failed. Please try again."),
                )
            }
        }
    }

    /// Add-plant form submission.
    pub async fn add_plant(&self, form: &AddPlantForm) -> FormOutcome {
        if let Err(e) = form.validate() {
            return FormOutcome::failure(e.to_string());
        }
        let request = AddPlantRequest {
            username: self.username(),
            plant_name: form.plant_name.trim().to_string(),
            species: form.species.trim().to_string(),
            device_id: Some(form.device_id.trim().to_string()),
        };

        match self.api.add_plant(&request).await {
            Ok(response) => {
                tracing::info!(device_id = ?response.device_id, "plant added");
                FormOutcome::success("Plant added successfully!")
                    .with_redirect(Redirect::after(paths::PLANTS, self.config.redirect_delay_ms))
            }
            Err(e) if e.is_network() => {
                tracing::error!("adding plant failed: {e}");
                FormOutcome::failure(
                    "Error adding plant. Please check your connection and try again.",
                )
            }
            Err(e) => {
                tracing::warn!("adding plant rejected: {e}");
                FormOutcome::failure(
                    e.server_message()
                        .map_or_else(|| "Error adding plant. Please try again.".to_string(), |m| {
                            format!("Error adding plant: {m}")
                        }),
                )
            }
        }
    }

    /// Change-connection form submission.
    pub async fn change_connection(&self, form: &ChangeConnectionForm) -> FormOutcome {
        if let Err(e) = form.validate() {
            return FormOutcome::failure(e.to_string());
        }
        let device_id = form.device_id.trim().to_string();
        let request = LinkDeviceRequest {
            username: self.username(),
            device_id: device_id.clone(),
        };

        match self.api.link_device(&request).await {
            Ok(_) => FormOutcome::success(format!("Connection updated to {device_id}"))
                .with_redirect(Redirect::after(paths::PLANTS, self.config.redirect_delay_ms)),
            Err(e) if e.is_network() => {
                tracing::error!("changing connection failed: {e}");
                FormOutcome::failure("Network error. Please try again.")
            }
            Err(e) => {
                tracing::warn!("changing connection rejected: {e}");
                FormOutcome::failure(format!(
                    "Error updating connection: {}",
                    e.server_message().unwrap_or("Please try again.")
                ))
            }
        }
    }

    /// Plants for the list page, with the sample list substituted on failure
    /// or when the account has none.
    pub async fn load_plant_list(&self) -> ResourceState<PlantList> {
        let username = self.username();
        let fallback = self.config.mock_fallback;

        match self.api.user_plants(&username).await {
            Ok(plants) if plants.is_empty() && fallback => {
                tracing::info!(%username, "no plants on account, showing samples");
                ResourceState::Ready(PlantList::sample())
            }
            Ok(plants) => ResourceState::Ready(PlantList::live(plants)),
            Err(e) if e.is_not_found() => {
                tracing::warn!(%username, "user not found");
                if fallback {
                    ResourceState::Ready(PlantList::sample())
                } else {
                    ResourceState::Ready(PlantList::live(Vec::new()))
                }
            }
            Err(e) => {
                tracing::error!("loading plants failed: {e}");
                ResourceState::failed_with(
                    format!("Error loading plants: {}", describe(&e)),
                    fallback.then(PlantList::sample),
                )
            }
        }
    }

    /// Plants the remove page can offer. Never substitutes samples; an
    /// unknown user simply has none.
    pub async fn load_removable_plants(&self) -> ResourceState<Vec<PlantSummary>> {
        let username = self.username();
        match self.api.user_plants(&username).await {
            Ok(plants) => ResourceState::Ready(plants),
            Err(e) if e.is_not_found() => {
                tracing::warn!(%username, "user not found, no plants to remove");
                ResourceState::Ready(Vec::new())
            }
            Err(e) => {
                tracing::error!("loading plants failed: {e}");
                ResourceState::failed_with(
                    "Error loading plants. Please try again.",
                    Some(Vec::new()),
                )
            }
        }
    }

    /// Latest reading for the detail page.
    pub async fn load_plant_detail(&self, plant_id: &str) -> ResourceState<PlantReading> {
        let plant_id = plant_id.trim();
        let fallback = || {
            self.config
                .mock_fallback
                .then(|| placeholder_reading(plant_id))
        };
        if plant_id.is_empty() {
            return ResourceState::failed_with("No plant selected", fallback());
        }

        match self.api.plant_data(plant_id).await {
            Ok(reading) => ResourceState::Ready(reading),
            Err(e) => {
                tracing::error!(%plant_id, "loading plant data failed: {e}");
                ResourceState::failed_with(
                    format!("Error loading plant data: {}", describe(&e)),
                    fallback(),
                )
            }
        }
    }

    /// Unpair a plant, then re-fetch the list so it disappears.
    pub async fn remove_plant(&self, device_id: &str) -> RemovalOutcome {
        let device_id = device_id.trim();
        if device_id.is_empty() {
            return RemovalOutcome {
                outcome: FormOutcome::failure("Please select a plant to remove."),
                refreshed: None,
            };
        }
        let request = RemovePlantRequest {
            username: self.username(),
            device_id: device_id.to_string(),
        };

        match self.api.remove_plant(&request).await {
            Ok(_) => {
                tracing::info!(%device_id, "plant removed");
                let refreshed = self.load_removable_plants().await;
                RemovalOutcome {
                    outcome: FormOutcome::success("Plant removed successfully! Updating list..."),
                    refreshed: Some(refreshed),
                }
            }
            Err(e) => {
                tracing::error!(%device_id, "removing plant failed: {e}");
                let message = match &e {
                    Error::Network { .. } => "Error: Cannot connect to API server. Please make sure the server is running.".to_string(),
                    Error::Http { .. } => format!(
                        "Error removing plant: {}",
                        e.server_message().unwrap_or("Please try again.")
                    ),
                    _ => "Error removing plant. Please check your connection and try again."
                        .to_string(),
                };
                RemovalOutcome {
                    outcome: FormOutcome::failure(message),
                    refreshed: None,
                }
            }
        }
    }

    /// Care analysis for the detail page.
    pub async fn load_care_report(&self, plant_id: &str) -> ResourceState<CareReport> {
        match self.api.care_report(plant_id).await {
            Ok(report) => ResourceState::Ready(report),
            Err(e) => {
                tracing::error!(%plant_id, "care analysis failed: {e}");
                ResourceState::failed_with(
                    format!("Care analysis unavailable: {}", describe(&e)),
                    None,
                )
            }
        }
    }

    /// Greeting from the API root, or `None` when it is unreachable.
    pub async fn api_status(&self) -> Option<String> {
        self.api.ping().await.into_option_logged("reaching the API")
    }

    /// Forget the logged-in user.
    pub fn logout(&self) {
        self.session.clear();
        tracing::info!("logged out");
    }
}

/// Short, user-facing reason for a failed fetch.
fn describe(err: &Error) -> String {
    match err {
        Error::Network { .. } => "cannot connect to API server".to_string(),
        Error::Http { status, .. } => err
            .server_message()
            .map_or_else(|| format!("server returned {status}"), str::to_string),
        Error::JsonParseFailed { .. } => "unexpected response from server".to_string(),
        other => other.to_string(),
    }
}
