//! Request bodies and response envelopes of the PlantKnight API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::literal;
use super::plant::RawDeviceRecord;
use crate::error::Error;
use crate::result::Result;

/// `POST /api/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /api/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub device_id: String,
}

/// `POST /api/add_plant`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPlantRequest {
    pub username: String,
    pub plant_name: String,
    pub species: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

/// `POST /api/remove_plant`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovePlantRequest {
    pub username: String,
    pub device_id: String,
}

/// `POST /api/link_device`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDeviceRequest {
    pub username: String,
    pub device_id: String,
}

/// `POST /api/call_llm`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareReportRequest {
    pub device_id: String,
}

/// The `message` field every endpoint returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
    pub message: String,
}

/// `GET /api/get_user_plants`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserPlantsResponse {
    pub plants: Vec<RawDeviceRecord>,
}

/// `POST /api/add_plant`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AddPlantResponse {
    pub message: String,
    pub device_id: Option<String>,
}

/// `GET /api/get_plant_data` and `POST /api/call_llm`.
///
/// `output` is a JSON object for the data endpoint, but some deployments send it
/// as a string holding the object, and the care endpoint sends model text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputResponse {
    pub message: String,
    pub output: Value,
}

impl OutputResponse {
    /// Decode `output` as a device record.
    ///
    /// A string `output` may hold JSON or the server's printed dictionary
    /// (single quotes, `ObjectId(...)`, `datetime.datetime(...)`); both decode.
    ///
    /// # Errors
    /// Returns `JsonParseFailed` when `output` is neither an object nor a
    /// string containing one.
    pub fn record(&self) -> Result<RawDeviceRecord> {
        match &self.output {
            Value::Object(_) => Ok(serde_json::from_value(self.output.clone())?),
            Value::String(text) => match serde_json::from_str(text) {
                Ok(record) => Ok(record),
                Err(e) => {
                    let json = literal::to_json(text).ok_or(e)?;
                    tracing::debug!("plant data arrived as a printed dictionary");
                    Ok(serde_json::from_str(&json)?)
                }
            },
            Value::Null => Err(Error::json_parse_failed("no plant data in response")),
            other => Err(Error::json_parse_failed(format!(
                "unexpected plant data: {other}"
            ))),
        }
    }

    /// Decode `output` as a care report.
    ///
    /// # Errors
    /// Returns `JsonParseFailed` when no report can be extracted.
    pub fn care_report(&self) -> Result<CareReport> {
        match &self.output {
            Value::Object(_) => Ok(serde_json::from_value(self.output.clone())?),
            Value::String(text) => CareReport::from_model_text(text),
            _ => Err(Error::json_parse_failed("no care report in response")),
        }
    }
}

/// Per-condition advice inside a [`CareReport`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareRecommendations {
    pub temperature: String,
    pub moisture: String,
    pub light_levels: String,
}

/// Scored care analysis for one plant; scores run 1 to 100.
///
/// Model output is loose about numbers, so scores decode from integers,
/// floats or numeric strings and are rounded into range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareReport {
    #[serde(deserialize_with = "score")]
    pub temperature_score: u8,
    #[serde(deserialize_with = "score")]
    pub moisture_score: u8,
    #[serde(deserialize_with = "score")]
    pub light_levels_score: u8,
    #[serde(default)]
    pub recommendations: CareRecommendations,
}

impl CareReport {
    /// Extract the report from model text, tolerating a Markdown code fence
    /// and prose around the JSON object.
    ///
    /// # Errors
    /// Returns `JsonParseFailed` when no JSON object can be found or decoded.
    pub fn from_model_text(text: &str) -> Result<Self> {
        let start = text.find('{');
        let end = text.rfind('}');
        let body = match (start, end) {
            (Some(start), Some(end)) if start < end => text.get(start..=end),
            _ => None,
        }
        .ok_or_else(|| Error::json_parse_failed("no JSON object in care report"))?;

        Ok(serde_json::from_str(body)?)
    }

    /// Scores outside 1..=100 are clamped into range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            temperature_score: self.temperature_score.clamp(1, 100),
            moisture_score: self.moisture_score.clamp(1, 100),
            light_levels_score: self.light_levels_score.clamp(1, 100),
            ..self
        }
    }
}

fn score<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let raw = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
    .ok_or_else(|| <D::Error as serde::de::Error>::custom(format!("invalid score: {value}")))?;
    Ok(clamp_score(raw))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_score(raw: f64) -> u8 {
    // Within 1..=100 after the clamp, so the cast is exact.
    raw.round().clamp(1.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_plant_request_omits_missing_device() {
        let request = AddPlantRequest {
            username: "ana".into(),
            plant_name: "Basil".into(),
            species: "Ocimum basilicum".into(),
            device_id: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({ "username": "ana", "plant_name": "Basil", "species": "Ocimum basilicum" })
        );
    }

    #[test]
    fn test_output_record_from_object() {
        let response: OutputResponse = serde_json::from_value(json!({
            "message": "Success",
            "output": { "device_id": "d1", "moisture": 50 }
        }))
        .unwrap();
        let record = response.record().unwrap();
        assert_eq!(record.identifier(), Some("d1"));
        assert_eq!(record.moisture, Some(50.0));
    }

    #[test]
    fn test_output_record_from_json_string() {
        let response: OutputResponse = serde_json::from_value(json!({
            "message": "Success",
            "output": "{\"device_id\": \"d2\", \"temperature\": 70.5}"
        }))
        .unwrap();
        assert_eq!(response.record().unwrap().temperature, Some(70.5));
    }

    #[test]
    fn test_output_record_rejects_python_none() {
        let response: OutputResponse = serde_json::from_value(json!({
            "message": "Success",
            "output": "None"
        }))
        .unwrap();
        assert!(matches!(response.record(), Err(Error::JsonParseFailed { .. })));
    }

    #[test]
    fn test_output_record_from_printed_mongo_document() {
        let response: OutputResponse = serde_json::from_value(json!({
            "message": "Success",
            "output": "{'_id': ObjectId('665f1c2ab3e4d5f6a7b8c9d0'), 'device_id': 'd7', 'plant_name': \"Ana's Fern\", 'is_connected': True, 'temperature': 71.5, 'moisture': 42, 'soil_ph': None, 'timestamp': datetime.datetime(2024, 6, 4, 13, 5, 9, 120000)}"
        }))
        .unwrap();
        let record = response.record().unwrap();
        assert_eq!(record.identifier(), Some("d7"));
        assert_eq!(record.display_name(), Some("Ana's Fern"));
        assert_eq!(record.is_connected, Some(true));
        assert_eq!(record.temperature, Some(71.5));
        assert_eq!(record.moisture, Some(42.0));
        assert_eq!(record.soil_ph, None);
        assert_eq!(
            record.timestamp.as_deref(),
            Some("2024-06-04T13:05:09.120000")
        );
    }

    #[test]
    fn test_care_report_scores_out_of_range_are_clamped() {
        let report: CareReport = serde_json::from_value(json!({
            "temperature_score": 300,
            "moisture_score": -5,
            "light_levels_score": 85.0
        }))
        .unwrap();
        assert_eq!(report.temperature_score, 100);
        assert_eq!(report.moisture_score, 1);
        assert_eq!(report.light_levels_score, 85);
    }

    #[test]
    fn test_care_report_scores_from_model_strings_and_floats() {
        let text = "Here you go: {\"temperature_score\": \"72\", \"moisture_score\": 49.6, \"light_levels_score\": 0}";
        let report = CareReport::from_model_text(text).unwrap();
        assert_eq!(report.temperature_score, 72);
        assert_eq!(report.moisture_score, 50);
        assert_eq!(report.light_levels_score, 1);
        assert_eq!(report.recommendations, CareRecommendations::default());
    }

    #[test]
    fn test_care_report_rejects_non_numeric_score() {
        let result = CareReport::from_model_text(
            "{\"temperature_score\": \"high\", \"moisture_score\": 50, \"light_levels_score\": 50}",
        );
        assert!(matches!(result, Err(Error::JsonParseFailed { .. })));
    }

    #[test]
    fn test_care_report_from_fenced_text() {
        let text = "```json\n{\n  \"temperature_score\": 80,\n  \"moisture_score\": 55,\n  \"light_levels_score\": 120,\n  \"recommendations\": {\n    \"temperature\": \"Fine.\",\n    \"moisture\": \"Water twice a week.\",\n    \"light_levels\": \"Move closer to a window.\"\n  }\n}\n```";
        let report = CareReport::from_model_text(text).unwrap();
        assert_eq!(report.temperature_score, 80);
        assert_eq!(report.moisture_score, 55);
        assert_eq!(report.light_levels_score, 100);
        assert_eq!(report.recommendations.moisture, "Water twice a week.");
    }

    #[test]
    fn test_care_report_without_json() {
        let result = CareReport::from_model_text("I could not analyze this plant.");
        assert!(matches!(result, Err(Error::JsonParseFailed { .. })));
    }
}
