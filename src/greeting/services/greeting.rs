//! Reads the current greeting and seeds the default one.

use crate::greeting::{
    domain::{CurrentGreeting, DEFAULT_GREETING, Greeting},
    ports::{GreetingRepository, GreetingRepositoryResult},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Result of [`GreetingService::ensure_default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table was empty and the default greeting was inserted.
    Seeded(Greeting),
    /// At least one greeting already existed; nothing was written.
    AlreadyPresent,
}

/// Serves the landing-page greeting.
pub struct GreetingService<R>
where
    R: GreetingRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> Clone for GreetingService<R>
where
    R: GreetingRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> GreetingService<R>
where
    R: GreetingRepository + ?Sized,
{
    /// Creates a new greeting service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the first stored greeting, or the fallback.
    ///
    /// Never fails: a read error is logged and answered with
    /// [`DEFAULT_GREETING`].
    pub async fn current(&self) -> CurrentGreeting {
        match self.repository.first().await {
            Ok(Some(greeting)) => CurrentGreeting::Stored(greeting),
            Ok(None) => CurrentGreeting::fallback(),
            Err(err) => {
                warn!(error = %err, "serving fallback greeting");
                CurrentGreeting::fallback()
            }
        }
    }

    /// Inserts [`DEFAULT_GREETING`] when no greeting is stored.
    ///
    /// The count and the insert are separate statements; two instances
    /// starting against an empty table may both seed.
    ///
    /// # Errors
    ///
    /// Propagates the repository error from either statement.
    pub async fn ensure_default(&self) -> GreetingRepositoryResult<SeedOutcome> {
        if self.repository.count().await? > 0 {
            return Ok(SeedOutcome::AlreadyPresent);
        }

        let greeting = self.repository.insert(DEFAULT_GREETING).await?;
        info!(greeting_id = %greeting.id(), "seeded default greeting");
        Ok(SeedOutcome::Seeded(greeting))
    }
}
