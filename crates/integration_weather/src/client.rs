//! OpenWeather client
//!
//! HTTP client for the OpenWeather current weather API.

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ApiErrorBody, ApiResponse, CurrentConditions};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// The API key was rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeather API base URL (default: <https://api.openweathermap.org>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as `appid`
    #[serde(default)]
    pub api_key: String,

    /// Unit system (default: `metric`)
    #[serde(default = "default_units")]
    pub units: String,

    /// Language of condition descriptions (default: `da`)
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Request timeout in seconds (default: 30, ignored in the browser)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_lang() -> String {
    "da".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            units: default_units(),
            lang: default_lang(),
            timeout_secs: default_timeout(),
        }
    }
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("units", &self.units)
            .field("lang", &self.lang)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Weather client trait for fetching weather data
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions for a coordinate pair
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, WeatherError>;
}

/// OpenWeather HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new OpenWeather client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));
        let client = builder
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    fn current_url(&self) -> String {
        format!(
            "{}/data/2.5/weather",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Decode the response body into a reading
    fn parse_current(response: ApiResponse) -> Result<CurrentConditions, WeatherError> {
        let condition = response.weather.into_iter().next().ok_or_else(|| {
            WeatherError::ParseError("No weather condition in response".to_string())
        })?;

        Ok(CurrentConditions {
            icon: condition.icon,
            description: condition.description,
            temperature: response.main.temp,
            humidity: response.main.humidity,
            wind_speed: response.wind.speed,
            place_name: response.name,
        })
    }

    /// Provider message from an error body, or the bare status
    async fn error_detail(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<ApiErrorBody>().await {
            Ok(ApiErrorBody {
                message: Some(message),
            }) => format!("HTTP {status}: {message}"),
            _ => format!("HTTP {status}"),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.current_url();
        debug!(url = %url, units = %self.config.units, lang = %self.config.lang, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", self.config.api_key.clone()),
                ("units", self.config.units.clone()),
                ("lang", self.config.lang.clone()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(WeatherError::Unauthorized(Self::error_detail(response).await));
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(Self::error_detail(response).await));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        Self::parse_current(api_response)
    }
}
