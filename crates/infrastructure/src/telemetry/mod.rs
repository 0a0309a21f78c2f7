//! Logging infrastructure
//!
//! Installs the global `tracing` subscriber for native and browser builds.

mod logging;

pub use logging::{LoggingConfig, TelemetryError, init_logging};
