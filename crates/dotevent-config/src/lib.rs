#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! File- and environment-backed settings for dotevent hosts.
//!
//! Layout: `model.rs` (typed settings), `validate.rs` (field parsers),
//! `loader.rs` (JSON documents and environment overrides), `defaults.rs`.

mod defaults;
pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    ENV_CONFIG_PATH, ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_TRACE_DISPATCH, apply_env_overrides, load,
    load_from_path, load_from_str,
};
pub use model::{RegistrySettings, Settings, TelemetrySettings};
