//! Site configuration
//!
//! Split into focused sub-modules:
//! - `integrations`: OpenWeather and EmailJS settings
//!
//! Logging settings live with the subscriber setup in `telemetry`.

mod integrations;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use crate::telemetry::LoggingConfig;
pub use integrations::{ContactAppConfig, WeatherAppConfig};

/// Errors raised while loading or checking the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(String),

    /// A TOML document could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// The configuration was read but holds invalid values
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(not(target_arch = "wasm32"))]
impl From<::config::ConfigError> for ConfigError {
    fn from(err: ::config::ConfigError) -> Self {
        Self::Load(err.to_string())
    }
}

/// Complete site client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Weather widget settings
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Contact form settings
    #[serde(default)]
    pub contact: ContactAppConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SiteConfig {
    /// Load configuration from environment and optional `site.toml`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("site")
    }

    /// Load configuration from environment and an optional file
    ///
    /// `file` is resolved like `config::File::with_name`, so the extension
    /// may be omitted. Environment variables override file values, e.g.
    /// `NATURNAT_WEATHER__API_KEY` or `NATURNAT_LOGGING__FILTER`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        let builder = ::config::Config::builder()
            // Load from file if exists
            .add_source(::config::File::with_name(file).required(false))
            // Override with environment variables
            .add_source(
                ::config::Environment::with_prefix("NATURNAT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Parse configuration from a TOML document
    ///
    /// Used where no filesystem or environment exists, e.g. a document
    /// embedded in the browser bundle.
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(document).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weather.refresh_interval_minutes == 0 {
            return Err(ConfigError::Invalid(
                "weather.refresh_interval_minutes must be greater than zero".to_string(),
            ));
        }
        for location in &self.weather.locations {
            location
                .validate()
                .map_err(|e| ConfigError::Invalid(format!("weather.locations: {e}")))?;
        }

        for (key, value) in [
            ("contact.service_id", &self.contact.service_id),
            ("contact.template_id", &self.contact.template_id),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }
}
