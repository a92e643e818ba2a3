//! Thread-safe in-memory submission log.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::contact::{
    domain::{ContactSubmission, NewContactSubmission, SubmissionId},
    ports::{ContactRepository, ContactRepositoryError, ContactRepositoryResult},
};

/// In-memory contact repository.
///
/// Identifiers start at 1 and increase by one per append; timestamps come
/// from the injected clock.
#[derive(Clone)]
pub struct InMemoryContactRepository {
    state: Arc<RwLock<InMemoryContactState>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Debug, Default)]
struct InMemoryContactState {
    last_id: i32,
    submissions: Vec<ContactSubmission>,
}

impl InMemoryContactRepository {
    /// Creates an empty repository stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty repository stamped by `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryContactState::default())),
            clock,
        }
    }

    /// Returns the number of stored submissions.
    ///
    /// # Errors
    ///
    /// Returns [`ContactRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn len(&self) -> ContactRepositoryResult<usize> {
        let state = self.state.read().map_err(store_error)?;
        Ok(state.submissions.len())
    }

    /// Returns `true` when nothing has been stored.
    ///
    /// # Errors
    ///
    /// Returns [`ContactRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn is_empty(&self) -> ContactRepositoryResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryContactRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryContactRepository")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn store_error(err: impl fmt::Display) -> ContactRepositoryError {
    ContactRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn append(
        &self,
        submission: &NewContactSubmission,
    ) -> ContactRepositoryResult<ContactSubmission> {
        let mut state = self.state.write().map_err(store_error)?;

        state.last_id = state.last_id.checked_add(1).ok_or_else(|| {
            ContactRepositoryError::persistence(std::io::Error::other(
                "submission identifier overflow",
            ))
        })?;
        let stored = ContactSubmission::new(
            SubmissionId::new(state.last_id),
            submission.clone(),
            self.clock.utc(),
        );
        state.submissions.push(stored.clone());
        Ok(stored)
    }

    async fn list_newest_first(&self) -> ContactRepositoryResult<Vec<ContactSubmission>> {
        let state = self.state.read().map_err(store_error)?;
        let mut submissions = state.submissions.clone();
        submissions.sort_by(|left, right| {
            right
                .created_at()
                .cmp(&left.created_at())
                .then_with(|| right.id().cmp(&left.id()))
        });
        Ok(submissions)
    }
}
