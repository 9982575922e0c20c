//! Settings baked into the bundle.

use plantknight_core::{AppConfig, Result};

/// `plantknight.toml` as shipped next to the crate manifest.
const EMBEDDED_CONFIG: &str = include_str!("../../plantknight.toml");

/// Parse the embedded settings, then apply the build-time API override.
///
/// # Errors
/// Returns `TomlParseFailed` or `InvalidConfig` when the embedded file or the
/// override is unusable.
pub fn load_config() -> Result<AppConfig> {
    parse_config(EMBEDDED_CONFIG, option_env!("PLANTKNIGHT_API_URL"))
}

fn parse_config(source: &str, api_override: Option<&str>) -> Result<AppConfig> {
    AppConfig::from_toml_str(source)?
        .with_api_override(api_override)
        .validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = parse_config(EMBEDDED_CONFIG, None);
        assert_eq!(config, Ok(AppConfig::default()));
    }

    #[test]
    fn test_override_replaces_base_url() {
        let config = parse_config(EMBEDDED_CONFIG, Some("https://api.plantknight.io/"));
        assert_eq!(
            config.map(|c| c.api_base_url),
            Ok("https://api.plantknight.io".to_string())
        );
    }

    #[test]
    fn test_bad_override_is_rejected() {
        assert!(parse_config(EMBEDDED_CONFIG, Some("ftp://plants")).is_err());
    }
}
