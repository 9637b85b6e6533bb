//! Validation helpers and parsing utilities for settings fields.

use crate::defaults::{LOG_FORMATS, LOG_LEVELS};
use crate::error::{ConfigError, ConfigResult};

/// Normalise and check a log level name.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the name is not a known level.
pub fn parse_log_level(field: &str, value: &str) -> ConfigResult<String> {
    let level = value.trim().to_ascii_lowercase();
    if LOG_LEVELS.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(invalid(field, value, "unknown log level"))
    }
}

/// Normalise and check a log format name.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the name is not `pretty` or `json`.
pub fn parse_log_format(field: &str, value: &str) -> ConfigResult<String> {
    let format = value.trim().to_ascii_lowercase();
    if LOG_FORMATS.contains(&format.as_str()) {
        Ok(format)
    } else {
        Err(invalid(field, value, "unknown log format"))
    }
}

/// Parse a boolean flag from `true`/`false`/`1`/`0`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for any other value.
pub fn parse_bool(field: &str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(invalid(field, value, "must be a boolean")),
    }
}

fn invalid(field: &str, value: &str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidField {
        field: field.to_string(),
        value: value.to_string(),
        reason,
    }
}
