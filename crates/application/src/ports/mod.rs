//! Port definitions for application layer
//!
//! Outbound ports describe the external providers; view ports describe the
//! page regions each feature reads and writes. Adapters in the
//! infrastructure and presentation layers implement them.

mod contact_form_view;
mod menu_view;
mod message_delivery_port;
mod weather_card_view;
mod weather_port;

pub use contact_form_view::ContactFormView;
pub use menu_view::MenuView;
pub use message_delivery_port::{DeliveryFailure, DeliveryReceipt, MessageDeliveryPort};
pub use weather_card_view::WeatherCardView;
pub use weather_port::WeatherPort;
