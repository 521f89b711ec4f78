//! Observability setup for the asyncdoc generator.
//!
//! This crate provides:
//! - Structured logging (JSON or pretty) on stderr
//! - Standard event names and logging macros for the generation pipeline
//!
//! # Usage
//!
//! ```ignore
//! use asyncdoc_telemetry::{LogFormat, TelemetryConfig};
//!
//! let config = TelemetryConfig::new()
//!     .with_log_level("debug")
//!     .with_log_format(LogFormat::Json);
//!
//! asyncdoc_telemetry::init(&config)?;
//! ```

pub mod config;
pub mod logging;

pub use config::{LogFormat, TelemetryConfig};
pub use logging::events;

use thiserror::Error;

/// Telemetry errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Failed to initialize logging.
    #[error("failed to initialize logging: {0}")]
    LoggingInit(String),
}

/// Install the global subscriber for the given configuration.
///
/// Fails if a subscriber is already installed in this process.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    logging::init_logging(config)?;

    tracing::debug!(
        log_level = %config.log_level,
        log_format = ?config.log_format,
        "logging initialized"
    );

    Ok(())
}
