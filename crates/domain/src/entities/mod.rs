//! Domain entities - Transient records the features build and discard

mod accordion;
mod contact_submission;
mod weather_snapshot;

pub use accordion::{accordion_toggle, open_count};
pub use contact_submission::{
    ContactField, ContactSubmission, DEFAULT_RECIPIENT_LABEL, TemplateParams,
};
pub use weather_snapshot::{
    ICON_ALT_TEXT, ICON_BASE_URL, WeatherCardContent, WeatherSnapshot, round_half_up,
};
