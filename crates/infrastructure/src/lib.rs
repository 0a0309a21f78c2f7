//! Infrastructure layer - Adapters for external systems
//!
//! Implements the outbound ports of the application layer on top of the
//! OpenWeather and EmailJS clients, and carries the site configuration,
//! logging setup and the native refresh scheduler.

pub mod adapters;
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod scheduled_tasks;
pub mod telemetry;

pub use adapters::*;
pub use config::{ConfigError, ContactAppConfig, LoggingConfig, SiteConfig, WeatherAppConfig};
#[cfg(not(target_arch = "wasm32"))]
pub use scheduled_tasks::{RefreshHandle, spawn_weather_refresh};
pub use telemetry::{TelemetryError, init_logging};
