//! Core error types for PlantKnight operations.
//!
//! Every failure is explicit and typed. Pages never panic on a bad response;
//! they turn one of these into a visible message.

use thiserror::Error;

/// Core error type for API, configuration and storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Transport errors
    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    // Parsing errors
    #[error("JSON parse error: {reason}")]
    JsonParseFailed { reason: String },

    #[error("TOML parse error: {reason}")]
    TomlParseFailed { reason: String },

    // Input errors
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // Browser storage
    #[error("storage error: {reason}")]
    Storage { reason: String },
}

impl Error {
    /// Create a network error.
    pub fn network(reason: impl Into<String>) -> Self {
        Self::Network {
            reason: reason.into(),
        }
    }

    /// Create an HTTP status error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Create a JSON parse error.
    pub fn json_parse_failed(reason: impl Into<String>) -> Self {
        Self::JsonParseFailed {
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a storage error.
    pub fn storage(reason: impl Into<String>) -> Self {
        Self::Storage {
            reason: reason.into(),
        }
    }

    /// True for a 404 response.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }

    /// True when the request never produced an HTTP response.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// The message the server sent back with a non-2xx response, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::json_parse_failed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::http(401, "Invalid username or password").to_string(),
            "HTTP 401: Invalid username or password"
        );
        assert_eq!(
            Error::MissingField { field: "Username" }.to_string(),
            "Username is required"
        );
        assert_eq!(
            Error::network("connection refused").to_string(),
            "network error: connection refused"
        );
    }

    #[test]
    fn test_not_found_detection() {
        assert!(Error::http(404, "User not found").is_not_found());
        assert!(!Error::http(500, "boom").is_not_found());
        assert!(!Error::network("offline").is_not_found());
    }

    #[test]
    fn test_server_message_ignores_blank() {
        assert_eq!(Error::http(409, "Username already exists").server_message(), Some("Username already exists"));
        assert_eq!(Error::http(500, "  ").server_message(), None);
        assert_eq!(Error::network("offline").server_message(), None);
    }

    #[test]
    fn test_json_error_conversion() {
        let err: Error = serde_json::from_str::<u32>("not json")
            .map_err(Error::from)
            .err()
            .unwrap_or_else(|| Error::network("unexpected"));
        assert!(matches!(err, Error::JsonParseFailed { .. }));
    }
}
