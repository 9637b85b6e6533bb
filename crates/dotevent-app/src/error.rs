//! # Design
//!
//! - Centralize application-level errors for bootstrap and the demo run.
//! - Keep error messages constant while carrying context fields for debugging.

use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Settings could not be loaded.
    #[error("configuration operation failed")]
    Config {
        /// Operation identifier.
        operation: &'static str,
        /// Source configuration error.
        source: dotevent_config::ConfigError,
    },
    /// Logging could not be installed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: dotevent_telemetry::TelemetryError,
    },
    /// An event operation failed.
    #[error("event operation failed")]
    Events {
        /// Operation identifier.
        operation: &'static str,
        /// Source registry error.
        source: dotevent_events::EventError,
    },
}

impl AppError {
    pub(crate) const fn events(
        operation: &'static str,
        source: dotevent_events::EventError,
    ) -> Self {
        Self::Events { operation, source }
    }
}
