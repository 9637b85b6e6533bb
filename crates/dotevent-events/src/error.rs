//! Event registry error primitives.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::topics::EventId;

/// Grammar an input string was validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// Literal event identifier; wildcards are rejected.
    Identifier,
    /// Event pattern; the leading segment may be `*`.
    Pattern,
}

impl Display for Grammar {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier => formatter.write_str("event ID"),
            Self::Pattern => formatter.write_str("event ID pattern"),
        }
    }
}

/// Errors raised by registry operations.
#[derive(Debug, Error)]
pub enum EventError {
    /// Argument had the wrong shape (not a string or a list of strings).
    #[error("invalid argument type: {reason}")]
    InvalidArgument {
        /// Machine-readable reason for the rejection.
        reason: &'static str,
    },
    /// Argument was a string but violated the identifier or pattern grammar.
    #[error("illegal {grammar}: {input:?}")]
    InvalidFormat {
        /// Offending token, after splitting on spaces.
        input: String,
        /// Grammar the token was checked against.
        grammar: Grammar,
    },
    /// A registered callback failed during a trigger pass.
    #[error("callback for {event_id} at slot {index} failed")]
    Callback {
        /// Identifier whose callback failed.
        event_id: EventId,
        /// Slot index of the failing callback.
        index: usize,
        /// Error returned by the callback.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// The built-in grammar expression could not be compiled.
    #[error("event grammar unavailable")]
    GrammarUnavailable {
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
}

impl EventError {
    /// Returns `true` for argument errors raised before any registry mutation.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::InvalidFormat { .. }
        )
    }
}

/// Result wrapper for registry operations.
pub type EventResult<T> = Result<T, EventError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn invalid_format_names_grammar_and_input() {
        let err = EventError::InvalidFormat {
            input: "show.*".into(),
            grammar: Grammar::Identifier,
        };
        assert_eq!(err.to_string(), "illegal event ID: \"show.*\"");
        assert!(err.is_validation());

        let err = EventError::InvalidFormat {
            input: "show.*".into(),
            grammar: Grammar::Pattern,
        };
        assert_eq!(err.to_string(), "illegal event ID pattern: \"show.*\"");
    }

    #[test]
    fn callback_error_exposes_source() -> Result<(), Box<dyn Error>> {
        let err = EventError::Callback {
            event_id: EventId::parse("show")?,
            index: 3,
            source: Box::new(io::Error::other("boom")),
        };
        assert_eq!(err.to_string(), "callback for show at slot 3 failed");
        assert!(!err.is_validation());
        let source = err.source().ok_or("expected source")?;
        assert_eq!(source.to_string(), "boom");
        Ok(())
    }

    #[test]
    fn invalid_argument_reports_reason() {
        let err = EventError::InvalidArgument {
            reason: "expected a string or a list of strings",
        };
        assert_eq!(
            err.to_string(),
            "invalid argument type: expected a string or a list of strings"
        );
    }
}
