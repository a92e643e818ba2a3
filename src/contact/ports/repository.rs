//! Repository port for the append-only submission log.

use crate::contact::domain::{ContactSubmission, NewContactSubmission};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for contact repository operations.
pub type ContactRepositoryResult<T> = Result<T, ContactRepositoryError>;

/// Contact submission persistence contract.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Appends one submission and returns it with its assigned identifier
    /// and timestamp.
    ///
    /// Identical submissions are stored as separate rows.
    ///
    /// # Errors
    ///
    /// Returns [`ContactRepositoryError`] when the store is unreachable or
    /// rejects the insert. Nothing is retried.
    async fn append(
        &self,
        submission: &NewContactSubmission,
    ) -> ContactRepositoryResult<ContactSubmission>;

    /// Returns every submission ordered by creation time, newest first.
    ///
    /// Submissions sharing a timestamp are ordered by descending identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ContactRepositoryError`] when the store is unreachable or
    /// the query fails.
    async fn list_newest_first(&self) -> ContactRepositoryResult<Vec<ContactSubmission>>;
}

/// Errors returned by contact repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ContactRepositoryError {
    /// No connection to the store could be obtained.
    #[error("contact store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ContactRepositoryError {
    /// Wraps a connection failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
