//! `PostgreSQL` repository implementation for greetings.

use super::{models::GreetingRow, schema::messages};
use crate::greeting::{
    domain::Greeting,
    ports::{GreetingRepository, GreetingRepositoryError, GreetingRepositoryResult},
};
use crate::store::{PgPool, StoreError, with_connection};
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed greeting repository.
#[derive(Debug, Clone)]
pub struct PostgresGreetingRepository {
    pool: PgPool,
}

impl PostgresGreetingRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GreetingRepository for PostgresGreetingRepository {
    async fn count(&self) -> GreetingRepositoryResult<u64> {
        let count = with_connection(&self.pool, |connection| {
            messages::table.count().get_result::<i64>(connection)
        })
        .await
        .map_err(to_repository_error)?;

        u64::try_from(count).map_err(GreetingRepositoryError::persistence)
    }

    async fn insert(&self, text: &str) -> GreetingRepositoryResult<Greeting> {
        let text = text.to_owned();
        let row = with_connection(&self.pool, move |connection| {
            diesel::insert_into(messages::table)
                .values(messages::text.eq(text))
                .returning(GreetingRow::as_returning())
                .get_result::<GreetingRow>(connection)
        })
        .await
        .map_err(to_repository_error)?;

        Ok(row.into())
    }

    async fn first(&self) -> GreetingRepositoryResult<Option<Greeting>> {
        let row = with_connection(&self.pool, |connection| {
            messages::table
                .order(messages::id.asc())
                .select(GreetingRow::as_select())
                .first::<GreetingRow>(connection)
                .optional()
        })
        .await
        .map_err(to_repository_error)?;

        Ok(row.map(Greeting::from))
    }
}

fn to_repository_error(err: StoreError) -> GreetingRepositoryError {
    if err.is_unavailable() {
        GreetingRepositoryError::unavailable(err)
    } else {
        GreetingRepositoryError::persistence(err)
    }
}
