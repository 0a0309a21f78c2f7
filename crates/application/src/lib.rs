//! Application layer - Use cases and orchestration
//!
//! Holds the three page features as services and the ports they drive:
//! outbound ports for the weather and message-delivery providers, and view
//! ports for the parts of the page each feature owns.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
