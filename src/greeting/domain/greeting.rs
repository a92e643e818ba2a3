//! Greeting records and the value served to clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text seeded into an empty store and served whenever no stored greeting
/// is available.
pub const DEFAULT_GREETING: &str = "Welcome to my professional profile!";

/// Store-assigned identifier of a greeting row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GreetingId(i32);

impl GreetingId {
    /// Wraps a store-assigned identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for GreetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted greeting. Created once, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    id: GreetingId,
    text: String,
    created_at: DateTime<Utc>,
}

impl Greeting {
    /// Creates a greeting from stored values.
    #[must_use]
    pub fn new(id: GreetingId, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            created_at,
        }
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> GreetingId {
        self.id
    }

    /// Returns the greeting text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the insertion timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Greeting served to clients.
///
/// Serializes as the stored row (`id`, `text`, `created_at`) or, for the
/// fallback, as `{"text": ...}` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CurrentGreeting {
    /// The first stored greeting.
    Stored(Greeting),
    /// No stored greeting could be read.
    Fallback {
        /// Always [`DEFAULT_GREETING`].
        text: &'static str,
    },
}

impl CurrentGreeting {
    /// Returns the fallback greeting.
    #[must_use]
    pub const fn fallback() -> Self {
        Self::Fallback {
            text: DEFAULT_GREETING,
        }
    }

    /// Returns the text to display.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Stored(greeting) => greeting.text(),
            Self::Fallback { text } => text,
        }
    }

    /// Returns `true` when no stored greeting was available.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}
