//! Weather service port
//!
//! Defines the interface for current-conditions lookups.

use async_trait::async_trait;
use domain::{GeoLocation, WeatherSnapshot};

use crate::error::ApplicationError;

/// Port for weather service operations
///
/// Browser builds drop the `Send` requirement on the returned futures since
/// `fetch` futures are tied to the page's single thread.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait WeatherPort: Send + Sync {
    /// Get current weather conditions for a location
    async fn current_conditions(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherSnapshot, ApplicationError>;
}
