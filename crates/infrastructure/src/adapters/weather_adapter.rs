//! Weather adapter - Implements WeatherPort using integration_weather

use std::sync::Arc;

use application::{error::ApplicationError, ports::WeatherPort};
use async_trait::async_trait;
use domain::{GeoLocation, WeatherSnapshot};
use integration_weather::{
    CurrentConditions, OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for the OpenWeather current conditions API
pub struct WeatherAdapter {
    client: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter").finish_non_exhaustive()
    }
}

impl WeatherAdapter {
    /// Create an adapter backed by an OpenWeather client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenWeatherClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter over any weather client
    #[must_use]
    pub fn with_client(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => ApplicationError::Internal(e),
            WeatherError::Unauthorized(e) => ApplicationError::Configuration(e),
            WeatherError::InvalidCoordinates => {
                ApplicationError::InvalidOperation("Invalid coordinates".into())
            },
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    /// Convert a provider reading into a domain snapshot
    fn map_current(current: CurrentConditions) -> WeatherSnapshot {
        WeatherSnapshot {
            icon_code: current.icon,
            temperature_celsius: current.temperature,
            description: current.description,
            humidity: current.humidity,
            wind_speed: current.wind_speed,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn current_conditions(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherSnapshot, ApplicationError> {
        let result = self
            .client
            .get_current(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(current) => {
                debug!(
                    temperature = current.temperature,
                    icon = %current.icon,
                    place = current.place_name.as_deref().unwrap_or("-"),
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result.map(Self::map_current)
    }
}
