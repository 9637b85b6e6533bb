//! Callback and payload types carried through a trigger pass.
//!
//! The registry never inspects payloads; it hands the caller's value to each
//! callback by reference, or `None` when the trigger carried no payload.

use std::error::Error;
use std::sync::Arc;

/// Error a callback may return to abort the current trigger pass.
pub type CallbackError = Box<dyn Error + Send + Sync>;

/// Outcome of a single callback invocation.
pub type CallbackResult = Result<(), CallbackError>;

/// Shared, type-erased callback registered against one or more identifiers.
pub type Callback<D> = Arc<dyn Fn(Option<&D>) -> CallbackResult + Send + Sync>;

/// How long a slot stays registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotLifetime {
    /// Stays until its identifier is removed with `off`.
    Persistent,
    /// Removes itself after its first successful invocation.
    Once,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::io;

    #[test]
    fn callbacks_receive_payload_by_reference() {
        let callback: Callback<Value> =
            Arc::new(|data: Option<&Value>| -> CallbackResult {
                match data {
                    Some(value) if value["ok"] == json!(true) => Ok(()),
                    _ => Err(io::Error::other("missing payload").into()),
                }
            });

        assert!(callback(Some(&json!({"ok": true}))).is_ok());
        assert!(callback(None).is_err());
    }
}
