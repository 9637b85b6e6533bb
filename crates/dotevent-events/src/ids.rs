//! Batch input accepted wherever one or more identifiers or patterns are expected.

use serde_json::Value;

use crate::error::{EventError, EventResult};
use crate::topics::{EventId, EventPattern};

/// Separator between multiple identifiers packed into one string.
pub const ID_SEPARATOR: char = ' ';

/// One or more event identifiers or patterns, before validation.
///
/// A single string is split on [`ID_SEPARATOR`], so `"show hide"` names two
/// events; consecutive separators produce an empty (invalid) token. List
/// entries are never split, so `["show hide"]` is one invalid token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventIds {
    /// Space-separated list packed into one string.
    Single(String),
    /// Explicit ordered list; each entry is one token, validated as-is.
    Many(Vec<String>),
}

impl EventIds {
    /// Split into raw tokens in caller order.
    #[must_use]
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            Self::Single(text) => text.split(ID_SEPARATOR).collect(),
            Self::Many(items) => items.iter().map(String::as_str).collect(),
        }
    }

    /// Validate every token as a literal identifier.
    ///
    /// # Errors
    ///
    /// Returns the first [`EventError::InvalidFormat`] encountered; nothing is
    /// returned for the remaining tokens.
    pub fn parse_identifiers(&self) -> EventResult<Vec<EventId>> {
        self.tokens().into_iter().map(EventId::parse).collect()
    }

    /// Validate and compile every token as a pattern.
    ///
    /// # Errors
    ///
    /// Returns the first [`EventError::InvalidFormat`] encountered.
    pub fn parse_patterns(&self) -> EventResult<Vec<EventPattern>> {
        self.tokens().into_iter().map(EventPattern::parse).collect()
    }
}

impl From<&str> for EventIds {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for EventIds {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&String> for EventIds {
    fn from(value: &String) -> Self {
        Self::Single(value.clone())
    }
}

impl From<&EventId> for EventIds {
    fn from(value: &EventId) -> Self {
        Self::Single(value.as_str().to_string())
    }
}

impl From<&[&str]> for EventIds {
    fn from(values: &[&str]) -> Self {
        Self::Many(values.iter().map(|value| (*value).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for EventIds {
    fn from(values: [&str; N]) -> Self {
        Self::Many(values.iter().map(|value| (*value).to_string()).collect())
    }
}

impl From<Vec<&str>> for EventIds {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for EventIds {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl TryFrom<Value> for EventIds {
    type Error = EventError;

    fn try_from(value: Value) -> EventResult<Self> {
        match value {
            Value::String(text) => Ok(Self::Single(text)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(text) => Ok(text),
                    _ => Err(EventError::InvalidArgument {
                        reason: "list entries must be strings",
                    }),
                })
                .collect::<EventResult<Vec<_>>>()
                .map(Self::Many),
            _ => Err(EventError::InvalidArgument {
                reason: "expected a string or a list of strings",
            }),
        }
    }
}

impl TryFrom<&Value> for EventIds {
    type Error = EventError;

    fn try_from(value: &Value) -> EventResult<Self> {
        Self::try_from(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Grammar;
    use serde_json::json;

    #[test]
    fn single_string_splits_on_spaces() {
        let ids = EventIds::from("show hide.a");
        assert_eq!(ids.tokens(), vec!["show", "hide.a"]);
        let parsed = ids.parse_identifiers().expect("valid identifiers");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].as_str(), "hide.a");
    }

    #[test]
    fn list_entries_are_not_split() {
        let ids = EventIds::from(vec!["show hide", "close"]);
        assert_eq!(ids.tokens(), vec!["show hide", "close"]);
        let err = ids.parse_identifiers().expect_err("space inside entry");
        assert!(matches!(
            err,
            EventError::InvalidFormat {
                ref input,
                grammar: Grammar::Identifier,
            } if input == "show hide"
        ));
    }

    #[test]
    fn empty_tokens_are_invalid() {
        for ids in [EventIds::from(""), EventIds::from("show  hide")] {
            let err = ids.parse_identifiers().expect_err("empty token");
            assert!(matches!(
                err,
                EventError::InvalidFormat {
                    grammar: Grammar::Identifier,
                    ..
                }
            ));
        }
    }

    #[test]
    fn empty_list_yields_no_tokens() {
        let ids = EventIds::from(Vec::<String>::new());
        assert!(ids.tokens().is_empty());
        assert!(ids.parse_patterns().expect("empty list").is_empty());
    }

    #[test]
    fn patterns_admit_wildcards_identifiers_do_not() {
        let ids = EventIds::from(["*.namespace", "show"]);
        assert_eq!(ids.parse_patterns().expect("patterns").len(), 2);
        assert!(ids.parse_identifiers().is_err());
    }

    #[test]
    fn json_values_must_be_strings_or_string_lists() {
        assert_eq!(
            EventIds::try_from(json!("show")).expect("string"),
            EventIds::Single("show".into())
        );
        assert_eq!(
            EventIds::try_from(&json!(["a", "b"])).expect("list"),
            EventIds::Many(vec!["a".into(), "b".into()])
        );

        for value in [json!(false), json!(null), json!(3), json!({"id": "show"})] {
            let err = EventIds::try_from(value).expect_err("wrong type");
            assert!(matches!(err, EventError::InvalidArgument { .. }));
        }
        let err = EventIds::try_from(json!(["show", 1])).expect_err("mixed list");
        assert!(matches!(err, EventError::InvalidArgument { .. }));
    }
}
