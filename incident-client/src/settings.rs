use config::Config;
pub use config::ConfigError;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5001/api";

/// Captured when the crate is compiled; the browser has no process environment.
const BUILD_BASE_URL: Option<&str> = option_env!("INCIDENT_API_URL");

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub api: ApiSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiSettings {
    pub base_url: String,
}

impl Settings {
    /// Default base URL, replaced by `override_url` when it is non-blank.
    pub fn resolve(override_url: Option<&str>) -> Result<Self, ConfigError> {
        let override_url = override_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(ToString::to_string);

        Config::builder()
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_override_option("api.base_url", override_url)?
            .build()?
            .try_deserialize()
    }

    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::resolve(BUILD_BASE_URL)
    }
}
