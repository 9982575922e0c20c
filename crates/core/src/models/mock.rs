//! Sample data shown when the API cannot be reached.
//!
//! Demo-only; pages flag the substitution with an error banner.

use super::plant::{ConnectionStatus, PlantReading, PlantSummary};

/// Provides the fallback plant list
pub fn mock_plants() -> Vec<PlantSummary> {
    vec![
        PlantSummary::new("device_1", "Fiddle Leaf Fig")
            .with_species("Ficus lyrata")
            .with_status(ConnectionStatus::Connected),
        PlantSummary::new("device_2", "Kitchen Basil")
            .with_species("Ocimum basilicum")
            .with_status(ConnectionStatus::Connected),
        PlantSummary::new("device_3", "Snake Plant")
            .with_species("Dracaena trifasciata")
            .with_status(ConnectionStatus::Disconnected),
    ]
}

/// Placeholder detail substituted when the reading for `id` cannot be fetched
pub fn placeholder_reading(id: &str) -> PlantReading {
    PlantReading {
        id: id.to_string(),
        name: "Sample Plant".to_string(),
        species: "Ficus lyrata".to_string(),
        moisture: Some(65.0),
        light: Some(300.0),
        temperature: Some(82.0),
        ph: Some(6.5),
        timestamp: None,
    }
}
