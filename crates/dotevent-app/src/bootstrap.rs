//! Settings loading, logging installation, and the demo run.

use std::path::PathBuf;

use dotevent_config::{ENV_CONFIG_PATH, Settings};
use dotevent_events::{EventHandler, RegistryOptions};
use dotevent_telemetry::{LogFormat, LoggingConfig};
use serde_json::json;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::notifier::Notifier;

/// Outcome of [`run_demo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSummary {
    /// Listener invocations performed.
    pub delivered: usize,
    /// Identifiers still registered at the end of the run.
    pub remaining_events: usize,
}

/// Load settings, install logging, and run the demo notifier.
///
/// # Errors
///
/// Returns an error if settings are invalid, logging cannot be installed, or an
/// event operation fails.
pub fn run_app() -> AppResult<()> {
    let settings = load_settings()?;

    let format = LogFormat::resolve(settings.telemetry.format.as_deref());
    dotevent_telemetry::init_logging(&LoggingConfig {
        level: &settings.telemetry.level,
        format,
        build_sha: env!("CARGO_PKG_VERSION"),
    })
    .map_err(|source| AppError::Telemetry {
        operation: "telemetry.init_logging",
        source,
    })?;

    let notifier = Notifier::new(
        "desktop",
        RegistryOptions {
            trace_dispatch: settings.registry.trace_dispatch,
        },
    );
    let summary = run_demo(&notifier)?;
    info!(
        notifier = notifier.name(),
        delivered = summary.delivered,
        remaining_events = summary.remaining_events,
        "demo finished"
    );
    Ok(())
}

/// Drive `notifier` through registration, wildcard triggers, and removal.
///
/// # Errors
///
/// Returns [`AppError::Events`] if any event operation fails.
pub fn run_demo(notifier: &Notifier) -> AppResult<DemoSummary> {
    notifier
        .listen("show.dialog show.toast", "render", false)
        .map_err(|err| AppError::events("demo.listen", err))?;
    notifier
        .listen("show.dialog", "focus", true)
        .map_err(|err| AppError::events("demo.listen", err))?;
    notifier
        .listen("hide.dialog", "dismiss", false)
        .map_err(|err| AppError::events("demo.listen", err))?;

    notifier
        .trigger_with("*.dialog", &json!({"title": "Unsaved changes", "modal": true}))
        .map_err(|err| AppError::events("demo.trigger", err))?;
    notifier
        .trigger("show.dialog")
        .map_err(|err| AppError::events("demo.trigger", err))?;
    notifier
        .off("*.toast")
        .map_err(|err| AppError::events("demo.off", err))?;
    notifier
        .trigger("*")
        .map_err(|err| AppError::events("demo.trigger", err))?;

    Ok(DemoSummary {
        delivered: notifier.delivered(),
        remaining_events: notifier.events().event_ids().len(),
    })
}

fn load_settings() -> AppResult<Settings> {
    let path = std::env::var_os(ENV_CONFIG_PATH).map(PathBuf::from);
    dotevent_config::load(path.as_deref()).map_err(|source| AppError::Config {
        operation: "config.load",
        source,
    })
}
