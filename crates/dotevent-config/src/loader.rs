//! Settings loading from JSON documents and the process environment.
//!
//! # Design
//! - Documents are optional; a missing path means defaults.
//! - Environment overrides apply after the document and before validation.
//! - Lookups are injected so tests never touch the real environment.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::model::Settings;
use crate::validate::{parse_bool, parse_log_format, parse_log_level};

/// Environment variable naming the settings document.
pub const ENV_CONFIG_PATH: &str = "DOTEVENT_CONFIG";
/// Environment override for `telemetry.level`.
pub const ENV_LOG_LEVEL: &str = "DOTEVENT_LOG_LEVEL";
/// Environment override for `telemetry.format`.
pub const ENV_LOG_FORMAT: &str = "DOTEVENT_LOG_FORMAT";
/// Environment override for `registry.trace_dispatch`.
pub const ENV_TRACE_DISPATCH: &str = "DOTEVENT_TRACE_DISPATCH";

/// Parse and validate a settings document.
///
/// # Errors
///
/// Returns [`ConfigError::Malformed`] for invalid JSON or unknown keys, and
/// [`ConfigError::InvalidField`] for values that fail validation.
pub fn load_from_str(document: &str) -> ConfigResult<Settings> {
    let settings: Settings = serde_json::from_str(document)
        .map_err(|source| ConfigError::Malformed { path: None, source })?;
    settings.validated()
}

/// Read, parse, and validate a settings document from disk.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read, otherwise the
/// errors of [`load_from_str`].
pub fn load_from_path(path: &Path) -> ConfigResult<Settings> {
    let document = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        operation: "settings.read",
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings =
        serde_json::from_str(&document).map_err(|source| ConfigError::Malformed {
            path: Some(path.to_path_buf()),
            source,
        })?;
    debug!(path = %path.display(), "loaded settings document");
    settings.validated()
}

/// Apply environment overrides using `lookup` to read variables.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when an override value is invalid.
pub fn apply_env_overrides<F>(settings: &mut Settings, lookup: F) -> ConfigResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(level) = lookup(ENV_LOG_LEVEL) {
        settings.telemetry.level = parse_log_level(ENV_LOG_LEVEL, &level)?;
    }
    if let Some(format) = lookup(ENV_LOG_FORMAT) {
        settings.telemetry.format = Some(parse_log_format(ENV_LOG_FORMAT, &format)?);
    }
    if let Some(flag) = lookup(ENV_TRACE_DISPATCH) {
        settings.registry.trace_dispatch = parse_bool(ENV_TRACE_DISPATCH, &flag)?;
    }
    Ok(())
}

/// Load settings from `path` (or defaults) and apply process environment overrides.
///
/// # Errors
///
/// Propagates the errors of [`load_from_path`] and [`apply_env_overrides`].
pub fn load(path: Option<&Path>) -> ConfigResult<Settings> {
    let mut settings = match path {
        Some(path) => load_from_path(path)?,
        None => Settings::default(),
    };
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok())?;
    settings.validated()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn document_fields_are_read() {
        let document = r#"{
            "telemetry": {"level": "debug", "format": "json"},
            "registry": {"trace_dispatch": true}
        }"#;
        let settings = load_from_str(document).expect("valid document");
        assert_eq!(settings.telemetry.level, "debug");
        assert_eq!(settings.telemetry.format.as_deref(), Some("json"));
        assert!(settings.registry.trace_dispatch);
    }

    #[test]
    fn unknown_keys_are_malformed() {
        let err = load_from_str(r#"{"telemetry": {"colour": true}}"#).expect_err("unknown key");
        assert!(matches!(err, ConfigError::Malformed { path: None, .. }));
    }

    #[test]
    fn invalid_level_in_document_is_rejected() {
        let err = load_from_str(r#"{"telemetry": {"level": "chatty"}}"#).expect_err("bad level");
        assert!(matches!(err, ConfigError::InvalidField { .. }));
    }

    #[test]
    fn env_overrides_win_over_document() {
        let mut settings = load_from_str(r#"{"telemetry": {"level": "warn"}}"#).expect("doc");
        apply_env_overrides(
            &mut settings,
            env(&[
                (ENV_LOG_LEVEL, "TRACE"),
                (ENV_LOG_FORMAT, "pretty"),
                (ENV_TRACE_DISPATCH, "1"),
            ]),
        )
        .expect("overrides");
        assert_eq!(settings.telemetry.level, "trace");
        assert_eq!(settings.telemetry.format.as_deref(), Some("pretty"));
        assert!(settings.registry.trace_dispatch);
    }

    #[test]
    fn invalid_override_names_the_variable() {
        let mut settings = Settings::default();
        let err = apply_env_overrides(&mut settings, env(&[(ENV_TRACE_DISPATCH, "maybe")]))
            .expect_err("bad flag");
        assert!(matches!(
            err,
            ConfigError::InvalidField { ref field, .. } if field == ENV_TRACE_DISPATCH
        ));
    }

    #[test]
    fn missing_overrides_leave_settings_untouched() {
        let mut settings = Settings::default();
        apply_env_overrides(&mut settings, env(&[])).expect("no overrides");
        assert_eq!(settings, Settings::default());
    }
}
