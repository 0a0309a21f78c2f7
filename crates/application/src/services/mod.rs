//! Application services - Use case implementations

mod contact_form_service;
mod menu_controller;
mod weather_widget_service;

pub use contact_form_service::{
    ContactFormService, ContactFormSettings, ERROR_PREFIX, FALLBACK_ERROR_TEXT,
    MISSING_FIELDS_TEXT, PENDING_LABEL, SubmitOutcome, error_message,
};
pub use menu_controller::{MenuController, MenuOutcome};
pub use weather_widget_service::{
    DEFAULT_REFRESH_INTERVAL, LocationOutcome, RefreshReport, WeatherWidgetService,
};
