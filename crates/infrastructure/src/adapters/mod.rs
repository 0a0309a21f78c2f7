//! Adapters implementing application ports

mod emailjs_adapter;
mod weather_adapter;

pub use emailjs_adapter::EmailJsAdapter;
pub use weather_adapter::WeatherAdapter;
