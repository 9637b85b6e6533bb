use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dotevent_events::{
    CallbackResult, EventHandler, EventIds, EventRegistry, EventResult, RegistryOptions,
};
use serde_json::Value;
use tracing::info;

/// Desktop-style notifier that owns its event registry.
#[derive(Debug, Clone)]
pub struct Notifier {
    name: String,
    events: EventRegistry,
    delivered: Arc<AtomicUsize>,
}

impl Notifier {
    /// Construct a notifier with an empty registry.
    #[must_use]
    pub fn new(name: impl Into<String>, options: RegistryOptions) -> Self {
        Self {
            name: name.into(),
            events: EventRegistry::with_options(options),
            delivered: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Notifier name used in log fields.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of deliveries made to listeners registered through [`Notifier::listen`].
    #[must_use]
    pub fn delivered(&self) -> usize {
        self.delivered.load(Ordering::SeqCst)
    }

    /// Register a logging listener; `one_shot` listeners fire once per identifier.
    ///
    /// # Errors
    ///
    /// Propagates identifier validation errors from the registry.
    pub fn listen(
        &self,
        ids: impl Into<EventIds>,
        label: &'static str,
        one_shot: bool,
    ) -> EventResult<()> {
        let notifier = self.name.clone();
        let delivered = Arc::clone(&self.delivered);
        let callback = move |data: Option<&Value>| -> CallbackResult {
            delivered.fetch_add(1, Ordering::SeqCst);
            info!(notifier = %notifier, listener = label, payload = ?data, "listener fired");
            Ok(())
        };
        if one_shot {
            self.once(ids, callback)
        } else {
            self.on(ids, callback)
        }
    }
}

impl EventHandler for Notifier {
    fn events(&self) -> &EventRegistry {
        &self.events
    }
}
