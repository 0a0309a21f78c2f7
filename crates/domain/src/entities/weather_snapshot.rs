//! Weather snapshot and its rendered card form

use serde::{Deserialize, Serialize};

/// Base URL of the provider's condition icons
pub const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Alt text of the condition icon
pub const ICON_ALT_TEXT: &str = "Vejr ikon";

/// One point-in-time weather reading for a single location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Provider icon code, e.g. `01d`
    pub icon_code: String,
    /// Temperature in Celsius
    pub temperature_celsius: f64,
    /// Localized condition text
    pub description: String,
    /// Relative humidity in percent, as reported by the provider
    pub humidity: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
}

impl WeatherSnapshot {
    /// URL of the 2x condition icon
    #[must_use]
    pub fn icon_url(&self) -> String {
        format!("{ICON_BASE_URL}/{}@2x.png", self.icon_code)
    }

    /// Texts shown in a weather card
    #[must_use]
    pub fn card_content(&self) -> WeatherCardContent {
        WeatherCardContent {
            icon_url: self.icon_url(),
            icon_alt: ICON_ALT_TEXT.to_string(),
            temperature: format!("{}°C", round_half_up(self.temperature_celsius)),
            description: self.description.clone(),
            humidity: format!("Luftfugtighed: {}%", self.humidity),
            wind: format!("Vind: {} m/s", round_half_up(self.wind_speed)),
        }
    }
}

/// Rendered texts of one weather card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCardContent {
    pub icon_url: String,
    pub icon_alt: String,
    pub temperature: String,
    pub description: String,
    pub humidity: String,
    pub wind: String,
}

/// Round to the nearest integer with halves going toward positive infinity
///
/// Matches the browser's `Math.round`, so `-2.5` becomes `-2` where
/// `f64::round` would give `-3`.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // saturating cast, readings are far inside i64
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
