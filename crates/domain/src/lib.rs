//! Domain layer for the Naturnat site client
//!
//! Contains the value objects and entities shared by the menu, contact form
//! and weather widget features. This layer has no I/O and no knowledge of the
//! browser or of the external HTTP services.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
