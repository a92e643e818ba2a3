//! Idempotent schema creation for the portfolio tables.

use super::{PgPool, with_connection};
use crate::bootstrap::{SchemaError, SchemaManager};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;

/// DDL creating `messages` and `contact_submissions` when absent.
///
/// Every statement uses `IF NOT EXISTS`; existing tables are never dropped
/// or altered.
pub const SCHEMA_SQL: &str =
    include_str!("../../migrations/2024-08-01-000000_create_portfolio_tables/up.sql");

/// Schema manager backed by a `PostgreSQL` pool.
#[derive(Debug, Clone)]
pub struct PostgresSchema {
    pool: PgPool,
}

impl PostgresSchema {
    /// Creates a schema manager over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchemaManager for PostgresSchema {
    async fn ensure_schema(&self) -> Result<(), SchemaError> {
        with_connection(&self.pool, |connection| connection.batch_execute(SCHEMA_SQL))
            .await
            .map_err(SchemaError::new)
    }
}
