//! HTTP API access

pub mod client;
pub mod transport;

pub use client::PlantApi;
pub use transport::{ApiRequest, ApiResponse, HttpMethod, Transport};

/// API paths, relative to the configured base URL
pub mod endpoints {
    pub const ROOT: &str = "/";
    pub const LOGIN: &str = "/api/login";
    pub const REGISTER: &str = "/api/register";
    pub const USER_PLANTS: &str = "/api/get_user_plants";
    pub const PLANT_DATA: &str = "/api/get_plant_data";
    pub const ADD_PLANT: &str = "/api/add_plant";
    pub const REMOVE_PLANT: &str = "/api/remove_plant";
    pub const LINK_DEVICE: &str = "/api/link_device";
    pub const CARE_REPORT: &str = "/api/call_llm";
}
