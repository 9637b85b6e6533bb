//! Typed settings models.

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::ConfigResult;
use crate::validate::{parse_log_format, parse_log_level};

/// Top-level settings document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Logging configuration.
    pub telemetry: TelemetrySettings,
    /// Event registry tunables.
    pub registry: RegistrySettings,
}

impl Settings {
    /// Validate every field, normalising case where the field allows it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::InvalidField`] for the first invalid field.
    pub fn validated(mut self) -> ConfigResult<Self> {
        self.telemetry.level = parse_log_level("telemetry.level", &self.telemetry.level)?;
        if let Some(format) = self.telemetry.format.take() {
            self.telemetry.format = Some(parse_log_format("telemetry.format", &format)?);
        }
        Ok(self)
    }
}

/// Logging section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TelemetrySettings {
    /// Log level name (`trace` through `error`).
    pub level: String,
    /// Output format (`pretty` or `json`); inferred from the build when absent.
    pub format: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            format: None,
        }
    }
}

/// Registry section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrySettings {
    /// Log each callback invocation at trace level.
    pub trace_dispatch: bool,
}
