//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A geographic location with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

/// Error type for invalid coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidCoordinates {
    /// Rejected latitude
    pub latitude: f64,
    /// Rejected longitude
    pub longitude: f64,
}

impl fmt::Display for InvalidCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid coordinates ({}, {}): latitude must be -90 to 90, longitude must be -180 to 180",
            self.latitude, self.longitude
        )
    }
}

impl std::error::Error for InvalidCoordinates {}

impl From<InvalidCoordinates> for DomainError {
    fn from(err: InvalidCoordinates) -> Self {
        Self::InvalidCoordinates {
            latitude: err.latitude,
            longitude: err.longitude,
        }
    }
}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a location without validation (for trusted sources)
    ///
    /// Caller must ensure latitude is in [-90, 90] and longitude in [-180, 180]
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Re-check the coordinate ranges
    ///
    /// Deserialized locations bypass [`GeoLocation::new`], so configuration
    /// loaders call this before handing locations to the widget.
    pub fn validate(&self) -> Result<(), InvalidCoordinates> {
        Self::new(self.latitude, self.longitude).map(|_| ())
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let loc = GeoLocation::new(56.8391, 9.8889).expect("valid coordinates");
        assert!((loc.latitude() - 56.8391).abs() < f64::EPSILON);
        assert!((loc.longitude() - 9.8889).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
        assert!(GeoLocation::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(GeoLocation::new(91.0, 0.0).is_err());
        assert!(GeoLocation::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(GeoLocation::new(0.0, 181.0).is_err());
        assert!(GeoLocation::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_nan_rejected() {
        assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_display() {
        let loc = GeoLocation::new(56.9537, 8.2548).expect("valid");
        assert_eq!(format!("{loc}"), "56.953700, 8.254800");
    }

    #[test]
    fn test_validate_deserialized() {
        let loc: GeoLocation =
            serde_json::from_str(r#"{"latitude":120.0,"longitude":8.0}"#).expect("deserialize");
        assert!(loc.validate().is_err());

        let loc: GeoLocation =
            serde_json::from_str(r#"{"latitude":56.0,"longitude":8.0}"#).expect("deserialize");
        assert!(loc.validate().is_ok());
    }

    #[test]
    fn test_into_domain_error() {
        let err: DomainError = GeoLocation::new(95.0, 1.0).unwrap_err().into();
        assert_eq!(
            err,
            DomainError::InvalidCoordinates {
                latitude: 95.0,
                longitude: 1.0
            }
        );
    }
}
