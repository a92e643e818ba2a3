//! `PostgreSQL` repository implementation for contact submissions.

use super::{
    models::{ContactSubmissionRow, NewContactSubmissionRow},
    schema::contact_submissions,
};
use crate::contact::{
    domain::{ContactSubmission, NewContactSubmission},
    ports::{ContactRepository, ContactRepositoryError, ContactRepositoryResult},
};
use crate::store::{PgPool, StoreError, with_connection};
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed contact repository.
#[derive(Debug, Clone)]
pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn append(
        &self,
        submission: &NewContactSubmission,
    ) -> ContactRepositoryResult<ContactSubmission> {
        let new_row = NewContactSubmissionRow::from(submission);

        let row = with_connection(&self.pool, move |connection| {
            diesel::insert_into(contact_submissions::table)
                .values(&new_row)
                .returning(ContactSubmissionRow::as_returning())
                .get_result::<ContactSubmissionRow>(connection)
        })
        .await
        .map_err(to_repository_error)?;

        Ok(row.into_submission())
    }

    async fn list_newest_first(&self) -> ContactRepositoryResult<Vec<ContactSubmission>> {
        let rows = with_connection(&self.pool, |connection| {
            contact_submissions::table
                .order((
                    contact_submissions::created_at.desc(),
                    contact_submissions::id.desc(),
                ))
                .select(ContactSubmissionRow::as_select())
                .load::<ContactSubmissionRow>(connection)
        })
        .await
        .map_err(to_repository_error)?;

        Ok(rows
            .into_iter()
            .map(ContactSubmissionRow::into_submission)
            .collect())
    }
}

fn to_repository_error(err: StoreError) -> ContactRepositoryError {
    if err.is_unavailable() {
        ContactRepositoryError::unavailable(err)
    } else {
        ContactRepositoryError::persistence(err)
    }
}
