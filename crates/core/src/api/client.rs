//! Typed client for the PlantKnight API.
//!
//! Every method issues exactly one request through the wrapped [`Transport`].
//! Non-2xx responses come back as `Error::Http` carrying the server's
//! `message`.

use serde::de::DeserializeOwned;

use super::endpoints;
use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::models::{
    AddPlantRequest, AddPlantResponse, CareReport, CareReportRequest, LinkDeviceRequest,
    LoginRequest, MessageResponse, OutputResponse, PlantReading, PlantSummary, RegisterRequest,
    RemovePlantRequest, UserPlantsResponse,
};
use crate::result::Result;

/// API client over any transport.
#[derive(Debug, Clone)]
pub struct PlantApi<T> {
    transport: T,
}

impl<T: Transport> PlantApi<T> {
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The wrapped transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    async fn call(&self, request: ApiRequest) -> Result<ApiResponse> {
        tracing::debug!(method = %request.method, path = %request.path, "api request");
        let response = self.transport.send(request).await?;
        tracing::debug!(status = response.status, "api response");
        response.error_for_status()
    }

    async fn call_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        self.call(request).await?.json()
    }

    /// `GET /` health check; returns the greeting message.
    ///
    /// # Errors
    /// Returns the transport or HTTP error.
    pub async fn ping(&self) -> Result<String> {
        let response: MessageResponse = self.call_json(ApiRequest::get(endpoints::ROOT)).await?;
        Ok(response.message)
    }

    /// Check credentials. On success returns the raw body, which the server
    /// fills with the user document.
    ///
    /// # Errors
    /// `Http { status: 401, .. }` for bad credentials, or the transport error.
    pub async fn login(&self, request: &LoginRequest) -> Result<String> {
        let response = self
            .call(ApiRequest::post(endpoints::LOGIN, request)?)
            .await?;
        Ok(response.message().unwrap_or(response.body))
    }

    /// Create an account paired with its first device.
    ///
    /// # Errors
    /// `Http { status: 409, .. }` when the username is taken, or the transport error.
    pub async fn register(&self, request: &RegisterRequest) -> Result<String> {
        let response: MessageResponse = self
            .call_json(ApiRequest::post(endpoints::REGISTER, request)?)
            .await?;
        Ok(response.message)
    }

    /// List the plants paired with `username`, normalized.
    ///
    /// # Errors
    /// `Http { status: 404, .. }` for an unknown user, or the transport/parse error.
    pub async fn user_plants(&self, username: &str) -> Result<Vec<PlantSummary>> {
        let request = ApiRequest::get(endpoints::USER_PLANTS).with_query("username", username);
        let response: UserPlantsResponse = self.call_json(request).await?;
        Ok(PlantSummary::from_raw_list(&response.plants))
    }

    /// Latest reading for one device, normalized.
    ///
    /// # Errors
    /// Returns the transport, HTTP or parse error.
    pub async fn plant_data(&self, device_id: &str) -> Result<PlantReading> {
        let request = ApiRequest::get(endpoints::PLANT_DATA).with_query("device_id", device_id);
        let response: OutputResponse = self.call_json(request).await?;
        let record = response.record()?;
        Ok(PlantReading::from_raw(&record, device_id))
    }

    /// Add a plant to the user's account.
    ///
    /// # Errors
    /// Returns the transport, HTTP or parse error.
    pub async fn add_plant(&self, request: &AddPlantRequest) -> Result<AddPlantResponse> {
        self.call_json(ApiRequest::post(endpoints::ADD_PLANT, request)?)
            .await
    }

    /// Unpair a plant from the user's account.
    ///
    /// # Errors
    /// Returns the transport or HTTP error.
    pub async fn remove_plant(&self, request: &RemovePlantRequest) -> Result<String> {
        let response = self
            .call(ApiRequest::post(endpoints::REMOVE_PLANT, request)?)
            .await?;
        Ok(response.message().unwrap_or_default())
    }

    /// Point the account at a different sensor device.
    ///
    /// # Errors
    /// Returns the transport or HTTP error.
    pub async fn link_device(&self, request: &LinkDeviceRequest) -> Result<String> {
        let response = self
            .call(ApiRequest::post(endpoints::LINK_DEVICE, request)?)
            .await?;
        Ok(response.message().unwrap_or_default())
    }

    /// Ask the API to score current growing conditions.
    ///
    /// # Errors
    /// Returns the transport, HTTP or parse error.
    pub async fn care_report(&self, device_id: &str) -> Result<CareReport> {
        let request = CareReportRequest {
            device_id: device_id.to_string(),
        };
        let response: OutputResponse = self
            .call_json(ApiRequest::post(endpoints::CARE_REPORT, &request)?)
            .await?;
        response.care_report()
    }
}
