//! Plant and device records.
//!
//! The API is not consistent about field names (`plant_name` vs `name`,
//! `moisture` vs `soilMoisture`), so the wire record accepts both spellings and
//! the normalized types below pick whichever is present.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Display name for a record without a usable name.
pub const UNKNOWN_PLANT: &str = "Unknown Plant";

/// Display species for a record without a usable species.
pub const UNKNOWN_SPECIES: &str = "Unknown Species";

/// Rendered in place of a missing reading.
pub const MISSING_READING: &str = "--";

/// A device/plant record exactly as the API sent it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawDeviceRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub device_id: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub id: Option<String>,
    pub plant_name: Option<String>,
    pub name: Option<String>,
    pub species: Option<String>,
    pub is_connected: Option<bool>,
    #[serde(deserialize_with = "number_or_string")]
    pub moisture: Option<f64>,
    #[serde(rename = "soilMoisture", deserialize_with = "number_or_string")]
    pub soil_moisture: Option<f64>,
    #[serde(deserialize_with = "number_or_string")]
    pub light_levels: Option<f64>,
    #[serde(rename = "lightLevel", deserialize_with = "number_or_string")]
    pub light_level: Option<f64>,
    #[serde(deserialize_with = "number_or_string")]
    pub temperature: Option<f64>,
    #[serde(deserialize_with = "number_or_string")]
    pub soil_ph: Option<f64>,
    #[serde(deserialize_with = "number_or_string")]
    pub ph: Option<f64>,
    #[serde(deserialize_with = "string_or_number")]
    pub timestamp: Option<String>,
}

impl RawDeviceRecord {
    /// The device identifier under either spelling.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        non_blank(self.device_id.as_deref()).or_else(|| non_blank(self.id.as_deref()))
    }

    /// The display name under either spelling.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        non_blank(self.plant_name.as_deref()).or_else(|| non_blank(self.name.as_deref()))
    }

    /// The species, if non-blank.
    #[must_use]
    pub fn species_name(&self) -> Option<&str> {
        non_blank(self.species.as_deref())
    }
}

/// Whether the paired sensor has reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectionStatus {
    Connected,
    #[default]
    Disconnected,
}

impl ConnectionStatus {
    /// Map the raw connectivity flag; absent means disconnected.
    #[must_use]
    pub fn from_flag(flag: Option<bool>) -> Self {
        if flag.unwrap_or(false) {
            Self::Connected
        } else {
            Self::Disconnected
        }
    }

    /// CSS modifier for status badges.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Connected => "status-connected",
            Self::Disconnected => "status-disconnected",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connected => write!(f, "Connected"),
            Self::Disconnected => write!(f, "Disconnected"),
        }
    }
}

/// One entry of the plant list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantSummary {
    /// Route identifier; the device id or a positional stand-in.
    pub id: String,
    /// The real device id, when the record carried one.
    pub device_id: Option<String>,
    pub name: String,
    pub species: String,
    pub status: ConnectionStatus,
}

impl PlantSummary {
    /// Creates a disconnected summary with an unknown species.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            device_id: Some(id.clone()),
            id,
            name: name.into(),
            species: UNKNOWN_SPECIES.to_string(),
            status: ConnectionStatus::default(),
        }
    }

    /// Builder pattern: set species
    #[must_use]
    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = species.into();
        self
    }

    /// Builder pattern: set connection status
    #[must_use]
    pub const fn with_status(mut self, status: ConnectionStatus) -> Self {
        self.status = status;
        self
    }

    /// Normalize a wire record at position `index` of its list.
    #[must_use]
    pub fn from_raw(raw: &RawDeviceRecord, index: usize) -> Self {
        let device_id = raw.identifier().map(str::to_string);
        Self {
            id: device_id
                .clone()
                .unwrap_or_else(|| format!("plant_{index}")),
            device_id,
            name: raw.display_name().unwrap_or(UNKNOWN_PLANT).to_string(),
            species: raw.species_name().unwrap_or(UNKNOWN_SPECIES).to_string(),
            status: ConnectionStatus::from_flag(raw.is_connected),
        }
    }

    /// Normalize a whole list, keeping wire order.
    #[must_use]
    pub fn from_raw_list(records: &[RawDeviceRecord]) -> Vec<Self> {
        records
            .iter()
            .enumerate()
            .map(|(index, raw)| Self::from_raw(raw, index))
            .collect()
    }

    /// Option label used by the removal picker: `Name (Species) - Status`.
    #[must_use]
    pub fn picker_label(&self) -> String {
        format!("{} ({}) - {}", self.name, self.species, self.status)
    }
}

/// Latest telemetry snapshot for one plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantReading {
    pub id: String,
    pub name: String,
    pub species: String,
    /// Soil moisture, percent.
    pub moisture: Option<f64>,
    /// Light level, lux.
    pub light: Option<f64>,
    /// Temperature, degrees Fahrenheit.
    pub temperature: Option<f64>,
    pub ph: Option<f64>,
    pub timestamp: Option<String>,
}

impl PlantReading {
    /// Normalize a wire record requested under `requested_id`.
    #[must_use]
    pub fn from_raw(raw: &RawDeviceRecord, requested_id: &str) -> Self {
        Self {
            id: raw.identifier().unwrap_or(requested_id).to_string(),
            name: raw.display_name().unwrap_or(UNKNOWN_PLANT).to_string(),
            species: raw.species_name().unwrap_or(UNKNOWN_SPECIES).to_string(),
            moisture: raw.moisture.or(raw.soil_moisture),
            light: raw.light_levels.or(raw.light_level),
            temperature: raw.temperature,
            ph: raw.soil_ph.or(raw.ph),
            timestamp: non_blank(raw.timestamp.as_deref()).map(str::to_string),
        }
    }

    #[must_use]
    pub fn moisture_display(&self) -> String {
        format_reading(self.moisture, "%")
    }

    #[must_use]
    pub fn light_display(&self) -> String {
        format_reading(self.light, " lux")
    }

    #[must_use]
    pub fn temperature_display(&self) -> String {
        format_reading(self.temperature, "°F")
    }

    #[must_use]
    pub fn ph_display(&self) -> String {
        format_reading(self.ph, "")
    }

    #[must_use]
    pub fn timestamp_display(&self) -> String {
        self.timestamp
            .clone()
            .unwrap_or_else(|| MISSING_READING.to_string())
    }
}

/// Render a reading with at most one decimal place.
fn format_reading(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let rounded = (v * 10.0).round() / 10.0;
            if rounded.fract() == 0.0 {
                format!("{rounded:.0}{unit}")
            } else {
                format!("{rounded:.1}{unit}")
            }
        }
        _ => MISSING_READING.to_string(),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn number_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
