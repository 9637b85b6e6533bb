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

//! Binary entrypoint that wires settings, logging, and a demo event host.

use dotevent_app::{AppResult, run_app};

/// Runs the demo host and exits non-zero on failure.
fn main() -> AppResult<()> {
    run_app()
}
