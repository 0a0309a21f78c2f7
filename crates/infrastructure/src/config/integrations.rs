//! Integration configurations: OpenWeather and EmailJS.

use std::time::Duration;

use application::ContactFormSettings;
use domain::{DEFAULT_RECIPIENT_LABEL, SiteLocation};
use integration_emailjs::EmailJsConfig;
use integration_weather::WeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

// ==============================
// Weather Configuration
// ==============================

/// Weather widget configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeather API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Unit system passed to the provider
    #[serde(default = "default_units")]
    pub units: String,

    /// Language of condition descriptions
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Minutes between two refresh cycles
    #[serde(default = "default_refresh_interval_minutes")]
    pub refresh_interval_minutes: u64,

    /// Locations with a weather card, in refresh order
    ///
    /// Configured as array of tables:
    /// `[[weather.locations]] name = "mols" latitude = 56.29 longitude = 10.49 card_id = "mols-weather"`
    #[serde(default = "SiteLocation::national_parks")]
    pub locations: Vec<SiteLocation>,
}

impl std::fmt::Debug for WeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("units", &self.units)
            .field("lang", &self.lang)
            .field("timeout_secs", &self.timeout_secs)
            .field("refresh_interval_minutes", &self.refresh_interval_minutes)
            .field("locations", &self.locations)
            .finish()
    }
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_lang() -> String {
    "da".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_refresh_interval_minutes() -> u64 {
    30
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            api_key: None,
            units: default_units(),
            lang: default_lang(),
            timeout_secs: default_timeout(),
            refresh_interval_minutes: default_refresh_interval_minutes(),
            locations: SiteLocation::national_parks(),
        }
    }
}

impl WeatherAppConfig {
    /// Convert to `integration_weather`'s `WeatherConfig`
    #[must_use]
    pub fn to_weather_config(&self) -> WeatherConfig {
        WeatherConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key_str().unwrap_or_default().to_string(),
            units: self.units.clone(),
            lang: self.lang.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Get the API key as a string reference
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Time between two refresh cycles
    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_minutes.saturating_mul(60))
    }
}

// ==============================
// Contact Form Configuration
// ==============================

/// Contact form delivery configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ContactAppConfig {
    /// EmailJS API base URL
    #[serde(default = "default_contact_base_url")]
    pub base_url: String,

    /// EmailJS account public key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub public_key: Option<SecretString>,

    /// Optional EmailJS private key, only for server-side senders
    #[serde(default, skip_serializing)]
    pub private_key: Option<SecretString>,

    /// EmailJS service id
    #[serde(default = "default_service_id")]
    pub service_id: String,

    /// EmailJS template id
    #[serde(default = "default_template_id")]
    pub template_id: String,

    /// Recipient label sent as `to_name`
    #[serde(default = "default_recipient_label")]
    pub recipient_label: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ContactAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactAppConfig")
            .field("base_url", &self.base_url)
            .field("public_key", &self.public_key.as_ref().map(|_| "[REDACTED]"))
            .field("private_key", &self.private_key.as_ref().map(|_| "[REDACTED]"))
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("recipient_label", &self.recipient_label)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_contact_base_url() -> String {
    "https://api.emailjs.com".to_string()
}

fn default_service_id() -> String {
    "service_5fvsv6q".to_string()
}

fn default_template_id() -> String {
    "template_fyb7xpa".to_string()
}

fn default_recipient_label() -> String {
    DEFAULT_RECIPIENT_LABEL.to_string()
}

impl Default for ContactAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_contact_base_url(),
            public_key: None,
            private_key: None,
            service_id: default_service_id(),
            template_id: default_template_id(),
            recipient_label: default_recipient_label(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ContactAppConfig {
    /// Convert to `integration_emailjs`'s `EmailJsConfig`
    #[must_use]
    pub fn to_emailjs_config(&self) -> EmailJsConfig {
        EmailJsConfig {
            base_url: self.base_url.clone(),
            public_key: self.public_key_str().unwrap_or_default().to_string(),
            private_key: self
                .private_key
                .as_ref()
                .map(|key| key.expose_secret().to_string()),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Identifiers used by the contact form service
    #[must_use]
    pub fn form_settings(&self) -> ContactFormSettings {
        ContactFormSettings::new(&self.service_id, &self.template_id)
            .with_recipient_label(&self.recipient_label)
    }

    /// Get the public key as a string reference
    #[must_use]
    pub fn public_key_str(&self) -> Option<&str> {
        self.public_key.as_ref().map(ExposeSecret::expose_secret)
    }
}
