//! Thread-safe in-memory greeting table.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::greeting::{
    domain::{Greeting, GreetingId},
    ports::{GreetingRepository, GreetingRepositoryError, GreetingRepositoryResult},
};

/// In-memory greeting repository.
#[derive(Clone)]
pub struct InMemoryGreetingRepository {
    greetings: Arc<RwLock<Vec<Greeting>>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl InMemoryGreetingRepository {
    /// Creates an empty repository stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty repository stamped by `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            greetings: Arc::new(RwLock::new(Vec::new())),
            clock,
        }
    }
}

impl Default for InMemoryGreetingRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryGreetingRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryGreetingRepository")
            .field("greetings", &self.greetings)
            .finish_non_exhaustive()
    }
}

fn store_error(err: impl fmt::Display) -> GreetingRepositoryError {
    GreetingRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl GreetingRepository for InMemoryGreetingRepository {
    async fn count(&self) -> GreetingRepositoryResult<u64> {
        let greetings = self.greetings.read().map_err(store_error)?;
        u64::try_from(greetings.len()).map_err(GreetingRepositoryError::persistence)
    }

    async fn insert(&self, text: &str) -> GreetingRepositoryResult<Greeting> {
        let mut greetings = self.greetings.write().map_err(store_error)?;
        let next_id = greetings
            .last()
            .map_or(Some(1), |last| last.id().value().checked_add(1))
            .ok_or_else(|| store_error("greeting identifier overflow"))?;
        let greeting = Greeting::new(GreetingId::new(next_id), text, self.clock.utc());
        greetings.push(greeting.clone());
        Ok(greeting)
    }

    async fn first(&self) -> GreetingRepositoryResult<Option<Greeting>> {
        let greetings = self.greetings.read().map_err(store_error)?;
        Ok(greetings.first().cloned())
    }
}
