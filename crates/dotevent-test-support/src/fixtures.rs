//! Payload fixtures and identifier samples.

use serde_json::{Value, json};

/// Identifiers every registry must accept.
pub const VALID_IDENTIFIERS: &[&str] = &[
    "show",
    "show.namespace",
    "show.namespaceB.namespaceA",
    "_internal",
    "Panel_2.open_3",
];

/// Strings the identifier grammar must reject.
pub const INVALID_IDENTIFIERS: &[&str] = &[
    "",
    "show.",
    ".show",
    "show..hide",
    "9lives",
    "show-1",
    "show.*",
    "*",
    "*.show",
    "sh\u{f6}w",
];

/// Payload shaped like a UI notification.
#[must_use]
pub fn sample_payload() -> Value {
    json!({
        "widget": "dialog",
        "visible": true,
        "size": [640, 480],
        "title": null,
    })
}
