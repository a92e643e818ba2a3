//! `PostgreSQL` connection pool and shared blocking helpers.
//!
//! Diesel connections are synchronous, so every statement runs on tokio's
//! blocking pool. A call checks out one pooled connection, runs a single
//! statement and returns the connection when it drops.

mod schema;

pub use schema::{PostgresSchema, SCHEMA_SQL};

use crate::config::DatabaseConfig;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

/// `PostgreSQL` connection pool shared by all adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Failures raised while talking to the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No connection could be checked out before the timeout.
    #[error("database connection unavailable: {0}")]
    Unavailable(#[from] PoolError),

    /// The statement failed.
    #[error("database query failed: {0}")]
    Query(#[from] diesel::result::Error),

    /// The blocking task panicked or was cancelled.
    #[error("blocking database task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl StoreError {
    /// Returns `true` when the store could not be reached at all.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Builds the connection pool without opening any connection.
///
/// Connections are established on first use, so an unreachable database
/// does not prevent the service from starting.
#[must_use]
pub fn build_pool(config: &DatabaseConfig) -> PgPool {
    let manager = ConnectionManager::<PgConnection>::new(config.connection_url());
    Pool::builder()
        .max_size(config.pool_size())
        .min_idle(Some(0))
        .connection_timeout(config.connect_timeout())
        .build_unchecked(manager)
}

/// Runs `f` with a pooled connection on the blocking thread pool.
pub(crate) async fn with_connection<F, T>(pool: &PgPool, f: F) -> Result<T, StoreError>
where
    F: FnOnce(&mut PgConnection) -> Result<T, diesel::result::Error> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get()?;
        Ok(f(&mut connection)?)
    })
    .await?
}
