//! Composition seam for types that expose an event surface.

use serde_json::Value;

use crate::error::EventResult;
use crate::ids::EventIds;
use crate::payloads::CallbackResult;
use crate::routing::EventRegistry;
use crate::topics::EventId;

/// Implemented by host types that own an [`EventRegistry`].
///
/// Only [`EventHandler::events`] is required; the four event operations
/// delegate to the embedded registry.
pub trait EventHandler<D = Value> {
    /// Registry owned by this host.
    fn events(&self) -> &EventRegistry<D>;

    /// See [`EventRegistry::on`].
    ///
    /// # Errors
    ///
    /// Propagates registry validation errors.
    fn on<F>(&self, ids: impl Into<EventIds>, callback: F) -> EventResult<()>
    where
        F: Fn(Option<&D>) -> CallbackResult + Send + Sync + 'static,
    {
        self.events().on(ids, callback)
    }

    /// See [`EventRegistry::once`].
    ///
    /// # Errors
    ///
    /// Propagates registry validation errors.
    fn once<F>(&self, ids: impl Into<EventIds>, callback: F) -> EventResult<()>
    where
        F: Fn(Option<&D>) -> CallbackResult + Send + Sync + 'static,
    {
        self.events().once(ids, callback)
    }

    /// See [`EventRegistry::off`].
    ///
    /// # Errors
    ///
    /// Propagates registry validation errors.
    fn off(&self, patterns: impl Into<EventIds>) -> EventResult<()> {
        self.events().off(patterns)
    }

    /// See [`EventRegistry::trigger`].
    ///
    /// # Errors
    ///
    /// Propagates validation errors and callback failures.
    fn trigger(&self, patterns: impl Into<EventIds>) -> EventResult<()> {
        self.events().trigger(patterns)
    }

    /// See [`EventRegistry::trigger_with`].
    ///
    /// # Errors
    ///
    /// Propagates validation errors and callback failures.
    fn trigger_with(&self, patterns: impl Into<EventIds>, data: &D) -> EventResult<()> {
        self.events().trigger_with(patterns, data)
    }

    /// See [`EventRegistry::listener_count`].
    fn listener_count(&self, event_id: &EventId) -> usize {
        self.events().listener_count(event_id)
    }
}

impl<D> EventHandler<D> for EventRegistry<D> {
    fn events(&self) -> &EventRegistry<D> {
        self
    }
}
