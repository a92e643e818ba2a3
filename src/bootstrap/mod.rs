//! Startup bootstrap: schema creation followed by the greeting seed.
//!
//! Both steps are idempotent and neither is fatal. A failure is logged and
//! recorded in the [`BootstrapReport`]; the service keeps serving so that
//! the static endpoints and the greeting fallback stay available.

use crate::greeting::{
    ports::GreetingRepository,
    services::{GreetingService, SeedOutcome},
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Failure while creating the schema.
#[derive(Debug, Clone, Error)]
#[error("schema creation failed: {0}")]
pub struct SchemaError(Arc<dyn std::error::Error + Send + Sync>);

impl SchemaError {
    /// Wraps the underlying cause.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}

/// Creates the tables when they are absent.
#[async_trait]
pub trait SchemaManager: Send + Sync {
    /// Ensures both tables exist. Calling it twice has the same effect as
    /// calling it once.
    async fn ensure_schema(&self) -> Result<(), SchemaError>;
}

/// Schema manager for the in-memory adapters, which need no DDL.
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemorySchema;

#[async_trait]
impl SchemaManager for InMemorySchema {
    async fn ensure_schema(&self) -> Result<(), SchemaError> {
        Ok(())
    }
}

/// What happened to the greeting seed during bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStatus {
    /// The default greeting was inserted.
    Seeded,
    /// A greeting already existed.
    AlreadyPresent,
    /// Schema creation failed, so seeding was not attempted.
    Skipped,
    /// The seed statements failed.
    Failed,
}

/// Summary of a bootstrap run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Whether schema creation succeeded.
    pub schema_ready: bool,
    /// Outcome of the greeting seed.
    pub seed: SeedStatus,
}

impl BootstrapReport {
    /// Returns `true` when any step failed.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        !self.schema_ready || matches!(self.seed, SeedStatus::Failed | SeedStatus::Skipped)
    }
}

/// Ensures the schema, then seeds the default greeting.
///
/// Seeding is skipped when the schema step fails. Errors are logged here
/// and never returned.
pub async fn run<S, R>(schema: &S, greetings: &GreetingService<R>) -> BootstrapReport
where
    S: SchemaManager + ?Sized,
    R: GreetingRepository + ?Sized,
{
    if let Err(err) = schema.ensure_schema().await {
        error!(error = %err, "schema bootstrap failed; continuing without seed");
        return BootstrapReport {
            schema_ready: false,
            seed: SeedStatus::Skipped,
        };
    }

    let seed = match greetings.ensure_default().await {
        Ok(SeedOutcome::Seeded(_)) => SeedStatus::Seeded,
        Ok(SeedOutcome::AlreadyPresent) => SeedStatus::AlreadyPresent,
        Err(err) => {
            error!(error = %err, "failed to seed default greeting");
            SeedStatus::Failed
        }
    };

    let report = BootstrapReport {
        schema_ready: true,
        seed,
    };
    info!(?report, "bootstrap complete");
    report
}
