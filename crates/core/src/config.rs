//! Front-end configuration.
//!
//! The UI embeds a TOML file at build time and parses it with
//! [`AppConfig::from_toml_str`]. Missing keys fall back to the defaults below.

use serde::Deserialize;
use url::Url;

use crate::error::Error;
use crate::result::Result;

/// Default API host used by the local development server.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Username used when nobody has logged in yet.
pub const DEFAULT_FALLBACK_USERNAME: &str = "testuser";

/// Runtime settings shared by every page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Base URL of the PlantKnight API, without trailing slash.
    pub api_base_url: String,
    /// Username substituted when the session store holds none.
    pub fallback_username: String,
    /// Delay before navigating away after a successful form submission.
    pub redirect_delay_ms: u32,
    /// How long a transient status message stays visible.
    pub status_clear_ms: u32,
    /// Substitute sample records when a fetch fails.
    pub mock_fallback: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            fallback_username: DEFAULT_FALLBACK_USERNAME.to_string(),
            redirect_delay_ms: 1500,
            status_clear_ms: 2000,
            mock_fallback: true,
        }
    }
}

impl AppConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    /// Returns `TomlParseFailed` for malformed TOML and `InvalidConfig` when
    /// validation fails.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| Error::TomlParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()
    }

    /// Replace the API base URL when an override is present and non-blank.
    #[must_use]
    pub fn with_api_override(mut self, api_base_url: Option<&str>) -> Self {
        if let Some(url) = api_base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api_base_url = url.to_string();
        }
        self
    }

    /// Check the settings and normalize the base URL.
    ///
    /// # Errors
    /// Returns `InvalidConfig` for a blank or non-http(s) base URL or a blank
    /// fallback username.
    pub fn validate(mut self) -> Result<Self> {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(Error::invalid_config("api_base_url must not be empty"));
        }

        let parsed = Url::parse(trimmed)
            .map_err(|e| Error::invalid_config(format!("api_base_url '{trimmed}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::invalid_config(format!(
                "api_base_url must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        if self.fallback_username.trim().is_empty() {
            return Err(Error::invalid_config("fallback_username must not be empty"));
        }

        self.api_base_url = trimmed.to_string();
        Ok(self)
    }
}
