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

//! In-process event registry for the dotevent workspace.
//!
//! Callbacks are registered against dot-separated identifiers such as
//! `show.namespaceA` and fired by identifier or by wildcard pattern
//! (`*.namespaceA`, `*`). Dispatch is synchronous and re-entrant.
//!
//! Layout: `topics.rs` (identifier grammar and compiled patterns), `ids.rs`
//! (batch input), `payloads.rs` (callback types), `routing.rs` (`EventRegistry`),
//! `handler.rs` (`EventHandler` composition trait), `error.rs`.

pub mod error;
pub mod handler;
pub mod ids;
pub mod payloads;
pub mod routing;
pub mod topics;

pub use error::{EventError, EventResult, Grammar};
pub use handler::EventHandler;
pub use ids::{EventIds, ID_SEPARATOR};
pub use payloads::{Callback, CallbackError, CallbackResult, SlotLifetime};
pub use routing::{EventRegistry, RegistryOptions};
pub use topics::{EventId, EventPattern, SEGMENT_SEPARATOR, WILDCARD};
