//! Weather data models
//!
//! Wire types of the OpenWeather current weather response and the decoded
//! reading handed to callers.

use serde::{Deserialize, Serialize};

/// Decoded current conditions for one coordinate pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Icon code, e.g. `01d`
    pub icon: String,
    /// Condition text in the requested language
    pub description: String,
    /// Temperature in the requested units
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Wind speed (m/s for metric units)
    pub wind_speed: f64,
    /// Place name the provider resolved the coordinates to
    pub place_name: Option<String>,
}

/// Raw API response from `/data/2.5/weather`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
    pub main: MainReadings,
    pub wind: WindReadings,
    #[serde(default)]
    pub name: Option<String>,
}

/// One entry of the `weather` array
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ConditionEntry {
    pub description: String,
    pub icon: String,
}

/// The `main` block
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MainReadings {
    pub temp: f64,
    pub humidity: f64,
}

/// The `wind` block
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WindReadings {
    pub speed: f64,
}

/// Error body OpenWeather returns with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
