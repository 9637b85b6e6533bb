//! Event identifiers and compiled event patterns.
//!
//! # Design
//! - Identifiers and patterns share one segment grammar; only patterns may lead with `*`.
//! - Patterns compile into segment tokens so matching never re-parses the source text.
//! - Grammar expressions compile once per process and surface failures as errors.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{EventError, EventResult, Grammar};

/// Separator between identifier segments.
pub const SEGMENT_SEPARATOR: char = '.';

/// Leading pattern segment standing for one or more identifier segments.
pub const WILDCARD: &str = "*";

static IDENTIFIER_GRAMMAR: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*$"));

static PATTERN_GRAMMAR: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z_][A-Za-z0-9_]*|\*)(?:\.[A-Za-z_][A-Za-z0-9_]*)*$"));

fn check(
    grammar: &'static LazyLock<Result<Regex, regex::Error>>,
    kind: Grammar,
    input: &str,
) -> EventResult<()> {
    let regex = match &**grammar {
        Ok(regex) => regex,
        Err(source) => {
            return Err(EventError::GrammarUnavailable {
                source: source.clone(),
            });
        }
    };
    if regex.is_match(input) {
        Ok(())
    } else {
        Err(EventError::InvalidFormat {
            input: input.to_string(),
            grammar: kind,
        })
    }
}

/// Validated, dot-separated event identifier such as `show.namespaceA`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(String);

impl EventId {
    /// Validate `input` against the identifier grammar.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidFormat`] when a segment is empty, contains a
    /// disallowed character, or is the wildcard.
    pub fn parse(input: &str) -> EventResult<Self> {
        check(&IDENTIFIER_GRAMMAR, Grammar::Identifier, input)?;
        Ok(Self(input.to_string()))
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the dot-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEGMENT_SEPARATOR)
    }
}

impl Display for EventId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for EventId {
    type Err = EventError;

    fn from_str(input: &str) -> EventResult<Self> {
        Self::parse(input)
    }
}

impl TryFrom<&str> for EventId {
    type Error = EventError;

    fn try_from(input: &str) -> EventResult<Self> {
        Self::parse(input)
    }
}

impl TryFrom<String> for EventId {
    type Error = EventError;

    fn try_from(input: String) -> EventResult<Self> {
        check(&IDENTIFIER_GRAMMAR, Grammar::Identifier, &input)?;
        Ok(Self(input))
    }
}

/// Compiled event pattern.
///
/// A literal pattern matches exactly one identifier. A pattern led by `*`
/// matches any identifier ending in the remaining segments, provided at least
/// one segment precedes them; `*` alone therefore matches every identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPattern {
    source: String,
    leading_wildcard: bool,
    tokens: Vec<String>,
}

impl EventPattern {
    /// Validate `input` against the pattern grammar and compile it.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidFormat`] when a segment is empty, contains a
    /// disallowed character, or a wildcard appears past the first segment.
    pub fn parse(input: &str) -> EventResult<Self> {
        check(&PATTERN_GRAMMAR, Grammar::Pattern, input)?;

        let mut segments = input.split(SEGMENT_SEPARATOR).peekable();
        let leading_wildcard = segments.next_if_eq(&WILDCARD).is_some();
        let tokens = segments.map(str::to_string).collect();

        Ok(Self {
            source: input.to_string(),
            leading_wildcard,
            tokens,
        })
    }

    /// Whether the pattern opens with the wildcard segment.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        self.leading_wildcard
    }

    /// Pattern text as supplied by the caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Test the whole identifier against the pattern.
    #[must_use]
    pub fn matches(&self, event_id: &EventId) -> bool {
        let segments: Vec<&str> = event_id.segments().collect();
        if !self.leading_wildcard {
            return segments.len() == self.tokens.len()
                && segments.iter().zip(&self.tokens).all(|(seg, tok)| seg == tok);
        }

        let Some(prefix_len) = segments.len().checked_sub(self.tokens.len()) else {
            return false;
        };
        prefix_len > 0
            && segments[prefix_len..]
                .iter()
                .zip(&self.tokens)
                .all(|(seg, tok)| seg == tok)
    }
}

impl Display for EventPattern {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.source)
    }
}

impl FromStr for EventPattern {
    type Err = EventError;

    fn from_str(input: &str) -> EventResult<Self> {
        Self::parse(input)
    }
}

impl From<&EventId> for EventPattern {
    fn from(event_id: &EventId) -> Self {
        Self {
            source: event_id.as_str().to_string(),
            leading_wildcard: false,
            tokens: event_id.segments().map(str::to_string).collect(),
        }
    }
}
