//! Configuration bundled into the browser build

use infrastructure::{ConfigError, SiteConfig};
use secrecy::SecretString;

/// The `site.toml` shipped with the bundle
pub const EMBEDDED_CONFIG: &str = include_str!("../site.toml");

/// Load the bundled configuration with build-time key overrides applied
pub fn site_config() -> Result<SiteConfig, ConfigError> {
    with_overrides(
        EMBEDDED_CONFIG,
        option_env!("NATURNAT_WEATHER_API_KEY"),
        option_env!("NATURNAT_CONTACT_PUBLIC_KEY"),
    )
}

fn with_overrides(
    document: &str,
    weather_key: Option<&str>,
    contact_key: Option<&str>,
) -> Result<SiteConfig, ConfigError> {
    let mut config = SiteConfig::from_toml(document)?;

    if let Some(key) = weather_key.filter(|key| !key.is_empty()) {
        config.weather.api_key = Some(SecretString::from(key));
    }
    if let Some(key) = contact_key.filter(|key| !key.is_empty()) {
        config.contact.public_key = Some(SecretString::from(key));
    }

    // the browser has neither a clock for the fmt timer nor an ANSI terminal
    config.logging = config.logging.plain();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_is_valid() {
        let config = with_overrides(EMBEDDED_CONFIG, None, None).unwrap();

        let cards: Vec<&str> = config
            .weather
            .locations
            .iter()
            .map(|location| location.card_id())
            .collect();
        assert_eq!(cards, ["mols-weather", "rold-weather", "thy-weather"]);
        assert_eq!(config.weather.refresh_interval_minutes, 30);
        assert_eq!(config.contact.service_id, "service_5fvsv6q");
        assert_eq!(config.contact.template_id, "template_fyb7xpa");
        assert!(config.weather.api_key_str().is_some());
    }

    #[test]
    fn embedded_locations_match_defaults() {
        let config = with_overrides(EMBEDDED_CONFIG, None, None).unwrap();
        assert_eq!(config.weather.locations, domain::SiteLocation::national_parks());
    }

    #[test]
    fn overrides_replace_keys() {
        let config =
            with_overrides(EMBEDDED_CONFIG, Some("build-weather"), Some("build-public")).unwrap();
        assert_eq!(config.weather.api_key_str(), Some("build-weather"));
        assert_eq!(config.contact.public_key_str(), Some("build-public"));
    }

    #[test]
    fn empty_override_is_ignored() {
        let config = with_overrides(EMBEDDED_CONFIG, Some(""), None).unwrap();
        assert_eq!(
            config.weather.api_key_str(),
            Some("496d913454e4dac0f9211f3aad419c93")
        );
        assert!(config.contact.public_key_str().is_none());
    }

    #[test]
    fn contact_adapter_builds_without_public_key() {
        let config = with_overrides(EMBEDDED_CONFIG, None, None).unwrap();
        assert!(config.contact.public_key_str().is_none());
        assert!(infrastructure::EmailJsAdapter::new(config.contact.to_emailjs_config()).is_ok());
    }

    #[test]
    fn logging_is_plain() {
        let config = with_overrides(EMBEDDED_CONFIG, None, None).unwrap();
        assert!(!config.logging.timestamps);
        assert!(!config.logging.ansi);
    }

    #[test]
    fn invalid_document_is_rejected() {
        assert!(with_overrides("[weather]\nrefresh_interval_minutes = 0\n", None, None).is_err());
    }
}
