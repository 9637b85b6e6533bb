//! Callback registry: registration, pattern resolution, and trigger passes.
//!
//! # Design
//! - One mutex guards the identifier table; it is never held while a callback runs,
//!   so callbacks may re-enter `on`, `once`, `off`, and `trigger`.
//! - Slots are tombstoned on removal. Indices are stable for the lifetime of an
//!   identifier's list, and each slot carries a registry-wide serial so a stale
//!   handle can never remove a slot registered after an `off`.
//! - Each identifier is dispatched from a snapshot of its live slots; entries
//!   removed before they are reached are skipped, entries added mid-pass wait for
//!   the next trigger.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::error::{EventError, EventResult};
use crate::ids::EventIds;
use crate::payloads::{Callback, CallbackResult, SlotLifetime};
use crate::topics::{EventId, EventPattern};

/// Tunables for a registry instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Log every callback invocation at `trace` level.
    pub trace_dispatch: bool,
}

struct Slot<D> {
    serial: u64,
    callback: Callback<D>,
    lifetime: SlotLifetime,
    firing: bool,
}

struct Table<D> {
    events: IndexMap<EventId, Vec<Option<Slot<D>>>>,
    next_serial: u64,
}

impl<D> Default for Table<D> {
    fn default() -> Self {
        Self {
            events: IndexMap::new(),
            next_serial: 0,
        }
    }
}

impl<D> Table<D> {
    fn resolve(&self, patterns: &[EventPattern]) -> Vec<EventId> {
        let mut matched = IndexSet::new();
        for pattern in patterns {
            for event_id in self.events.keys() {
                if pattern.matches(event_id) {
                    matched.insert(event_id.clone());
                }
            }
        }
        matched.into_iter().collect()
    }

    fn slot_mut(&mut self, handle: &SlotHandle) -> Option<&mut Slot<D>> {
        self.events
            .get_mut(&handle.event_id)
            .and_then(|slots| slots.get_mut(handle.index))
            .and_then(Option::as_mut)
            .filter(|slot| slot.serial == handle.serial)
    }
}

/// Address of one slot captured for a trigger pass.
struct SlotHandle {
    event_id: EventId,
    index: usize,
    serial: u64,
}

struct Pending<D> {
    handle: SlotHandle,
    callback: Callback<D>,
    lifetime: SlotLifetime,
}

/// In-process registry mapping event identifiers to ordered callbacks.
///
/// Cloning yields another handle to the same table, which is how callbacks
/// reach back into the registry that invoked them. The payload type `D` is
/// chosen by the owner; the registry only passes it through.
pub struct EventRegistry<D = Value> {
    table: Arc<Mutex<Table<D>>>,
    options: RegistryOptions,
}

impl<D> Clone for EventRegistry<D> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            options: self.options,
        }
    }
}

impl<D> Default for EventRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> std::fmt::Debug for EventRegistry<D> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let table = self.lock();
        formatter
            .debug_struct("EventRegistry")
            .field("events", &table.events.keys().collect::<Vec<_>>())
            .field("options", &self.options)
            .finish()
    }
}

impl<D> EventRegistry<D> {
    /// Construct an empty registry with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(RegistryOptions::default())
    }

    /// Construct an empty registry with explicit options.
    #[must_use]
    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            table: Arc::new(Mutex::new(Table::default())),
            options,
        }
    }

    /// Options this registry was built with.
    #[must_use]
    pub const fn options(&self) -> RegistryOptions {
        self.options
    }

    /// Register `callback` against every identifier in `ids`.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidFormat`] if any token is not a literal
    /// identifier; the registry is left untouched in that case.
    pub fn on<F>(&self, ids: impl Into<EventIds>, callback: F) -> EventResult<()>
    where
        F: Fn(Option<&D>) -> CallbackResult + Send + Sync + 'static,
    {
        self.attach(&ids.into(), Arc::new(callback), SlotLifetime::Persistent)
    }

    /// Register `callback` so it fires at most once per identifier.
    ///
    /// Each identifier in `ids` receives its own one-shot slot.
    ///
    /// # Errors
    ///
    /// Same as [`EventRegistry::on`].
    pub fn once<F>(&self, ids: impl Into<EventIds>, callback: F) -> EventResult<()>
    where
        F: Fn(Option<&D>) -> CallbackResult + Send + Sync + 'static,
    {
        self.attach(&ids.into(), Arc::new(callback), SlotLifetime::Once)
    }

    /// Register an already shared callback.
    ///
    /// # Errors
    ///
    /// Same as [`EventRegistry::on`].
    pub fn attach(
        &self,
        ids: &EventIds,
        callback: Callback<D>,
        lifetime: SlotLifetime,
    ) -> EventResult<()> {
        let event_ids = ids.parse_identifiers()?;

        let mut table = self.lock();
        for event_id in event_ids {
            let serial = table.next_serial;
            table.next_serial += 1;
            let slots = table.events.entry(event_id.clone()).or_default();
            let index = slots.len();
            slots.push(Some(Slot {
                serial,
                callback: Arc::clone(&callback),
                lifetime,
                firing: false,
            }));
            debug!(event_id = %event_id, index, ?lifetime, "registered callback");
        }
        Ok(())
    }

    /// Remove every callback of every identifier matching `patterns`.
    ///
    /// Patterns that match nothing are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidFormat`] if any token is not a valid pattern.
    pub fn off(&self, patterns: impl Into<EventIds>) -> EventResult<()> {
        let patterns = patterns.into().parse_patterns()?;

        let mut table = self.lock();
        let matched = table.resolve(&patterns);
        for event_id in &matched {
            table.events.shift_remove(event_id);
        }
        drop(table);

        debug!(removed = matched.len(), "unregistered events");
        Ok(())
    }

    /// Registered identifiers matching at least one of `patterns`.
    ///
    /// Results follow pattern order, then registration order, without duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidFormat`] if any token is not a valid pattern.
    pub fn match_identifiers(&self, patterns: impl Into<EventIds>) -> EventResult<Vec<EventId>> {
        let patterns = patterns.into().parse_patterns()?;
        Ok(self.lock().resolve(&patterns))
    }

    /// Fire every callback of every identifier matching `patterns`, without a payload.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidFormat`] for malformed patterns, or
    /// [`EventError::Callback`] when a callback fails; callbacks after the
    /// failing one are not invoked.
    pub fn trigger(&self, patterns: impl Into<EventIds>) -> EventResult<()> {
        self.dispatch(&patterns.into(), None)
    }

    /// Fire every callback of every identifier matching `patterns` with `data`.
    ///
    /// # Errors
    ///
    /// Same as [`EventRegistry::trigger`].
    pub fn trigger_with(&self, patterns: impl Into<EventIds>, data: &D) -> EventResult<()> {
        self.dispatch(&patterns.into(), Some(data))
    }

    /// Registered identifiers in registration order.
    #[must_use]
    pub fn event_ids(&self) -> Vec<EventId> {
        self.lock().events.keys().cloned().collect()
    }

    /// Number of live slots registered for `event_id`.
    #[must_use]
    pub fn listener_count(&self, event_id: &EventId) -> usize {
        self.lock()
            .events
            .get(event_id)
            .map_or(0, |slots| slots.iter().flatten().count())
    }

    /// Whether no identifier is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().events.is_empty()
    }

    fn dispatch(&self, patterns: &EventIds, data: Option<&D>) -> EventResult<()> {
        let patterns = patterns.parse_patterns()?;
        let targets = self.lock().resolve(&patterns);
        debug!(
            patterns = patterns.len(),
            matched = targets.len(),
            has_payload = data.is_some(),
            "trigger pass started"
        );

        for event_id in targets {
            for pending in self.snapshot(&event_id) {
                if !self.claim(&pending) {
                    continue;
                }
                if self.options.trace_dispatch {
                    trace!(event_id = %event_id, index = pending.handle.index, "invoking callback");
                }

                let outcome = (pending.callback)(data);
                self.settle(&pending, outcome.is_ok());
                outcome.map_err(|source| {
                    warn!(
                        event_id = %event_id,
                        index = pending.handle.index,
                        error = %source,
                        "callback failed; aborting trigger pass"
                    );
                    EventError::Callback {
                        event_id: event_id.clone(),
                        index: pending.handle.index,
                        source,
                    }
                })?;
            }
        }
        Ok(())
    }

    fn snapshot(&self, event_id: &EventId) -> Vec<Pending<D>> {
        let table = self.lock();
        let Some(slots) = table.events.get(event_id) else {
            return Vec::new();
        };
        slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.as_ref().map(|slot| Pending {
                    handle: SlotHandle {
                        event_id: event_id.clone(),
                        index,
                        serial: slot.serial,
                    },
                    callback: Arc::clone(&slot.callback),
                    lifetime: slot.lifetime,
                })
            })
            .collect()
    }

    /// Confirm the slot is still registered; one-shot slots are marked as firing
    /// so nested passes skip them.
    fn claim(&self, pending: &Pending<D>) -> bool {
        let mut table = self.lock();
        let Some(slot) = table.slot_mut(&pending.handle) else {
            return false;
        };
        match pending.lifetime {
            SlotLifetime::Persistent => true,
            SlotLifetime::Once if slot.firing => false,
            SlotLifetime::Once => {
                slot.firing = true;
                true
            }
        }
    }

    /// Post-invocation hook: tombstone a one-shot slot that ran successfully,
    /// re-arm it if the callback failed.
    fn settle(&self, pending: &Pending<D>, succeeded: bool) {
        if pending.lifetime != SlotLifetime::Once {
            return;
        }
        let mut table = self.lock();
        let handle = &pending.handle;
        if succeeded {
            if let Some(slots) = table.events.get_mut(&handle.event_id)
                && let Some(entry) = slots.get_mut(handle.index)
                && entry.as_ref().is_some_and(|slot| slot.serial == handle.serial)
            {
                *entry = None;
                debug!(
                    event_id = %handle.event_id,
                    index = handle.index,
                    "one-shot callback removed"
                );
            }
        } else if let Some(slot) = table.slot_mut(handle) {
            slot.firing = false;
        }
    }

    fn lock(&self) -> MutexGuard<'_, Table<D>> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
