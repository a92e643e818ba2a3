//! Identifier type for persisted contact submissions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a contact submission.
///
/// Identifiers come from a `SERIAL` column: unique and increasing in
/// insertion order, but not necessarily contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(i32);

impl SubmissionId {
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

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
