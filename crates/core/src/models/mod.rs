//! Data models for plant records and API payloads

pub mod api;
mod literal;
pub mod mock;
pub mod plant;

pub use api::{
    AddPlantRequest, AddPlantResponse, CareRecommendations, CareReport, CareReportRequest,
    LinkDeviceRequest, LoginRequest, MessageResponse, OutputResponse, RegisterRequest,
    RemovePlantRequest, UserPlantsResponse,
};
pub use mock::{mock_plants, placeholder_reading};
pub use plant::{
    ConnectionStatus, MISSING_READING, PlantReading, PlantSummary, RawDeviceRecord, UNKNOWN_PLANT,
    UNKNOWN_SPECIES,
};
