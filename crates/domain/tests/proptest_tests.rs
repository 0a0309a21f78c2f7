//! Property-based tests for domain value objects and transitions
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{
    ContactSubmission, GeoLocation, WeatherSnapshot, accordion_toggle, open_count, round_half_up,
};
use proptest::prelude::*;

// ============================================================================
// Accordion Property Tests
// ============================================================================

mod accordion_tests {
    use super::*;

    proptest! {
        #[test]
        fn at_most_one_open_after_every_click(
            len in 1usize..8,
            clicks in proptest::collection::vec(0usize..10, 0..40)
        ) {
            let mut states = vec![false; len];
            for clicked in clicks {
                states = accordion_toggle(&states, clicked);
                prop_assert!(open_count(&states) <= 1);
            }
        }

        #[test]
        fn double_click_closes_everything(
            len in 1usize..8,
            clicked in 0usize..8
        ) {
            prop_assume!(clicked < len);
            let opened = accordion_toggle(&vec![false; len], clicked);
            prop_assert!(opened[clicked]);
            let closed = accordion_toggle(&opened, clicked);
            prop_assert_eq!(open_count(&closed), 0);
        }

        #[test]
        fn length_is_preserved(
            states in proptest::collection::vec(any::<bool>(), 0..10),
            clicked in 0usize..12
        ) {
            prop_assert_eq!(accordion_toggle(&states, clicked).len(), states.len());
        }
    }
}

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let loc = GeoLocation::new(lat, lon);
            prop_assert!(loc.is_ok());
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }
    }
}

// ============================================================================
// Rendering Property Tests
// ============================================================================

mod rendering_tests {
    use super::*;

    proptest! {
        #[test]
        fn rounding_is_within_half(value in -100.0f64..100.0f64) {
            let rounded = round_half_up(value) as f64;
            prop_assert!((rounded - value).abs() <= 0.5);
        }

        #[test]
        fn card_shows_rounded_values(
            temp in -40.0f64..45.0f64,
            wind in 0.0f64..40.0f64,
            humidity in 0u8..=100
        ) {
            let snapshot = WeatherSnapshot {
                icon_code: "04n".to_string(),
                temperature_celsius: temp,
                description: "skyet".to_string(),
                humidity: f64::from(humidity),
                wind_speed: wind,
            };
            let card = snapshot.card_content();
            prop_assert_eq!(card.temperature, format!("{}°C", round_half_up(temp)));
            prop_assert_eq!(card.wind, format!("Vind: {} m/s", round_half_up(wind)));
            prop_assert_eq!(card.humidity, format!("Luftfugtighed: {humidity}%"));
        }
    }
}

// ============================================================================
// ContactSubmission Property Tests
// ============================================================================

mod contact_submission_tests {
    use super::*;

    proptest! {
        #[test]
        fn non_blank_fields_are_accepted(
            name in "[A-Za-zæøå]{1,20}",
            subject in "[a-z ]{0,10}[a-z]",
            message in ".{0,40}[a-z]"
        ) {
            let result = ContactSubmission::new(
                name.clone(), "gaest@example.dk", subject, message, "Naturnat",
            );
            prop_assert!(result.is_ok());
            prop_assert_eq!(result.unwrap().template_params().from_name, name);
        }

        #[test]
        fn whitespace_only_message_is_rejected(message in "[ \t\n]{0,10}") {
            let result = ContactSubmission::new("Ida", "ida@example.dk", "Hej", message, "Naturnat");
            prop_assert!(result.is_err());
        }
    }
}
