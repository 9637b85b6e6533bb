//! Thread-safe record of callback invocations.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;

/// One recorded callback invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Label supplied by the test when building the callback.
    pub label: String,
    /// Payload observed by the callback, if any.
    pub payload: Option<Value>,
}

/// Ordered log shared between a test and the callbacks it registers.
///
/// Clones share the same log, so a clone can be moved into each callback.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    entries: Arc<Mutex<Vec<Invocation>>>,
}

impl Recorder {
    /// Construct an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an invocation of `label` that saw `payload`.
    pub fn record(&self, label: impl Into<String>, payload: Option<&Value>) {
        self.lock().push(Invocation {
            label: label.into(),
            payload: payload.cloned(),
        });
    }

    /// Labels in invocation order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.lock()
            .iter()
            .map(|entry| entry.label.clone())
            .collect()
    }

    /// Full invocation log.
    #[must_use]
    pub fn invocations(&self) -> Vec<Invocation> {
        self.lock().clone()
    }

    /// Number of invocations recorded for `label`.
    #[must_use]
    pub fn count(&self, label: &str) -> usize {
        self.lock()
            .iter()
            .filter(|entry| entry.label == label)
            .count()
    }

    /// Total number of invocations recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Concatenated labels, mirroring callbacks that write to a shared output.
    #[must_use]
    pub fn transcript(&self) -> String {
        self.lock().iter().map(|entry| entry.label.as_str()).collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Invocation>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
