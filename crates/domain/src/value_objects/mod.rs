//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod site_location;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use site_location::SiteLocation;
