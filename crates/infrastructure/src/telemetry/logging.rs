//! Subscriber initialization and configuration
//!
//! The caller passes the writer, so the same setup serves a terminal, a
//! test buffer or the browser console.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed
    #[error("Invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber was already installed
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Configuration for log output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "application=debug,info")
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Emit one JSON object per event instead of text lines
    #[serde(default)]
    pub json: bool,

    /// Prefix events with a timestamp
    ///
    /// Must stay off in the browser, where the system clock is unavailable.
    #[serde(default = "default_true")]
    pub timestamps: bool,

    /// Colorize text output with ANSI escapes
    #[serde(default = "default_true")]
    pub ansi: bool,
}

fn default_filter() -> String {
    "info".to_string()
}

const fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
            timestamps: true,
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Settings for targets without a clock or a terminal
    #[must_use]
    pub fn plain(mut self) -> Self {
        self.timestamps = false;
        self.ansi = false;
        self
    }
}

/// Install the global subscriber writing to `make_writer`
///
/// `RUST_LOG` takes precedence over `config.filter` where an environment
/// exists.
///
/// # Example
///
/// ```ignore
/// use infrastructure::telemetry::{LoggingConfig, init_logging};
///
/// init_logging(&LoggingConfig::default(), std::io::stderr)?;
/// ```
pub fn init_logging<W>(config: &LoggingConfig, make_writer: W) -> Result<(), TelemetryError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter)
            .map_err(|e| TelemetryError::Filter(e.to_string()))?,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(config.ansi && !config.json)
        .with_writer(make_writer);

    let fmt_layer = match (config.json, config.timestamps) {
        (true, true) => fmt_layer.json().boxed(),
        (true, false) => fmt_layer.json().without_time().boxed(),
        (false, true) => fmt_layer.boxed(),
        (false, false) => fmt_layer.without_time().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(filter = %config.filter, json = config.json, "Logging initialized");
    Ok(())
}
