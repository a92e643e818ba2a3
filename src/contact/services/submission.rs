//! Service layer for the contact write path and the administrative read.

use crate::contact::{
    domain::{ContactDomainError, ContactForm, ContactSubmission},
    ports::{ContactRepository, ContactRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Service-level errors for contact operations.
#[derive(Debug, Error)]
pub enum ContactServiceError {
    /// The form failed validation; the store was not touched.
    #[error(transparent)]
    Validation(#[from] ContactDomainError),
    /// The repository operation failed.
    #[error(transparent)]
    Repository(#[from] ContactRepositoryError),
}

/// Result type for contact service operations.
pub type ContactServiceResult<T> = Result<T, ContactServiceError>;

/// Validates, persists and lists contact submissions.
pub struct ContactService<R>
where
    R: ContactRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> Clone for ContactService<R>
where
    R: ContactRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> ContactService<R>
where
    R: ContactRepository + ?Sized,
{
    /// Creates a new contact service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates `form` and appends it to the submission log.
    ///
    /// Exactly one row is written per successful call. Store failures are
    /// logged and returned; the caller decides whether to resubmit.
    ///
    /// # Errors
    ///
    /// Returns [`ContactServiceError::Validation`] without touching the store
    /// when a field is missing, empty or too long, and
    /// [`ContactServiceError::Repository`] when the insert fails.
    pub async fn submit(&self, form: ContactForm) -> ContactServiceResult<ContactSubmission> {
        let submission = form.validate().inspect_err(|err| {
            debug!(error = %err, "rejected contact form");
        })?;

        let stored = self
            .repository
            .append(&submission)
            .await
            .inspect_err(|err| {
                error!(error = %err, "failed to persist contact form submission");
            })?;

        info!(
            submission_id = %stored.id(),
            name = stored.name(),
            "contact form submission saved"
        );
        Ok(stored)
    }

    /// Returns every submission, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ContactServiceError::Repository`] when the query fails. There
    /// is no fallback for this administrative path.
    pub async fn list_submissions(&self) -> ContactServiceResult<Vec<ContactSubmission>> {
        let submissions = self
            .repository
            .list_newest_first()
            .await
            .inspect_err(|err| {
                error!(error = %err, "failed to list contact submissions");
            })?;
        debug!(count = submissions.len(), "listed contact submissions");
        Ok(submissions)
    }
}
