//! Diesel row models for contact submissions.

use super::schema::contact_submissions;
use crate::contact::domain::{
    ContactSubmission, NewContactSubmission, PersistedSubmissionData, SubmissionId,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for submissions.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contact_submissions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ContactSubmissionRow {
    /// Store-assigned identifier.
    pub id: i32,
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model. `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contact_submissions)]
pub struct NewContactSubmissionRow {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl From<&NewContactSubmission> for NewContactSubmissionRow {
    fn from(submission: &NewContactSubmission) -> Self {
        Self {
            name: submission.name().to_owned(),
            email: submission.email().to_owned(),
            message: submission.message().to_owned(),
        }
    }
}

impl ContactSubmissionRow {
    /// Rebuilds the domain record.
    ///
    /// Rows are trusted: the `NOT NULL` columns were validated on the way in.
    #[must_use]
    pub fn into_submission(self) -> ContactSubmission {
        let Self {
            id,
            name,
            email,
            message,
            created_at,
        } = self;
        ContactSubmission::from_persisted(PersistedSubmissionData {
            id: SubmissionId::new(id),
            name,
            email,
            message,
            created_at,
        })
    }
}
