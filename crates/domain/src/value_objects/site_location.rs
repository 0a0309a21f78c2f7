//! Named site locations shown in the weather widget

use serde::{Deserialize, Serialize};

use super::GeoLocation;
use crate::errors::DomainError;

/// A named place on the site with its own weather card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteLocation {
    /// Short key, e.g. `mols`
    name: String,
    /// Coordinates sent to the weather provider
    #[serde(flatten)]
    coordinates: GeoLocation,
    /// Id of the card element that displays this location
    card_id: String,
}

impl SiteLocation {
    /// Create a new site location
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` for an empty name or card id.
    pub fn new(
        name: impl Into<String>,
        coordinates: GeoLocation,
        card_id: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let location = Self {
            name: name.into(),
            coordinates,
            card_id: card_id.into(),
        };
        location.validate()?;
        Ok(location)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn coordinates(&self) -> &GeoLocation {
        &self.coordinates
    }

    #[must_use]
    pub fn card_id(&self) -> &str {
        &self.card_id
    }

    /// Check the invariants a deserialized location may have skipped
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "location name must not be empty".to_string(),
            ));
        }
        if self.card_id.trim().is_empty() {
            return Err(DomainError::ValidationError(format!(
                "location '{}' has no card id",
                self.name
            )));
        }
        self.coordinates.validate()?;
        Ok(())
    }

    /// The three national park locations the site ships with
    #[must_use]
    pub fn national_parks() -> Vec<Self> {
        [
            ("mols", 56.297_988_847_215_8, 10.497_669_641_961_8, "mols-weather"),
            ("rold", 56.8391, 9.8889, "rold-weather"),
            ("thy", 56.9537, 8.2548, "thy-weather"),
        ]
        .into_iter()
        .map(|(name, lat, lon, card_id)| Self {
            name: name.to_string(),
            coordinates: GeoLocation::new_unchecked(lat, lon),
            card_id: card_id.to_string(),
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn national_parks_are_ordered_and_valid() {
        let parks = SiteLocation::national_parks();
        let names: Vec<&str> = parks.iter().map(SiteLocation::name).collect();
        assert_eq!(names, ["mols", "rold", "thy"]);
        assert!(parks.iter().all(|p| p.validate().is_ok()));
        assert_eq!(parks[1].card_id(), "rold-weather");
        assert!((parks[2].coordinates().longitude() - 8.2548).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_card_id_rejected() {
        let result = SiteLocation::new("mols", GeoLocation::new_unchecked(56.0, 10.0), " ");
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn deserializes_flat_coordinates() {
        let json = r#"{"name":"thy","latitude":56.9537,"longitude":8.2548,"card_id":"thy-weather"}"#;
        let location: SiteLocation = serde_json::from_str(json).expect("deserialize");
        assert_eq!(location.name(), "thy");
        assert!((location.coordinates().latitude() - 56.9537).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_coordinates_fail_validation() {
        let json = r#"{"name":"x","latitude":99.0,"longitude":8.0,"card_id":"x-weather"}"#;
        let location: SiteLocation = serde_json::from_str(json).expect("deserialize");
        assert!(matches!(
            location.validate(),
            Err(DomainError::InvalidCoordinates { .. })
        ));
    }
}
