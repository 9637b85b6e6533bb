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

//! dotevent demo application wiring.
//!
//! Layout: `bootstrap.rs` (settings and logging), `notifier.rs` (host type that
//! embeds an event registry), `error.rs`.

/// Settings loading, logging installation, and the demo run.
pub mod bootstrap;
/// Application error types.
pub mod error;
/// Demo host embedding an event registry.
pub mod notifier;

pub use bootstrap::{DemoSummary, run_app, run_demo};
pub use error::{AppError, AppResult};
pub use notifier::Notifier;
