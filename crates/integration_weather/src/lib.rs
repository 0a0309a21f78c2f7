//! OpenWeather integration
//!
//! Client for the OpenWeather current weather endpoint
//! (<https://openweathermap.org/current>), queried by coordinate pair.

pub mod client;
mod models;

pub use client::{OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::CurrentConditions;
