//! Default values for settings fields.

/// Level used when neither the document nor the environment sets one.
pub(crate) const LOG_LEVEL: &str = "info";
/// Accepted log level names, lowercase.
pub(crate) const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
/// Accepted log format names.
pub(crate) const LOG_FORMATS: &[&str] = &["pretty", "json"];
