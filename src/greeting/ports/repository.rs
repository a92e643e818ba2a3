//! Repository port for the `messages` table.

use crate::greeting::domain::Greeting;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for greeting repository operations.
pub type GreetingRepositoryResult<T> = Result<T, GreetingRepositoryError>;

/// Greeting persistence contract.
#[async_trait]
pub trait GreetingRepository: Send + Sync {
    /// Returns the number of stored greetings.
    async fn count(&self) -> GreetingRepositoryResult<u64>;

    /// Stores a new greeting and returns it.
    async fn insert(&self, text: &str) -> GreetingRepositoryResult<Greeting>;

    /// Returns the greeting with the lowest identifier, if any.
    async fn first(&self) -> GreetingRepositoryResult<Option<Greeting>>;
}

/// Errors returned by greeting repository implementations.
#[derive(Debug, Clone, Error)]
pub enum GreetingRepositoryError {
    /// No connection to the store could be obtained.
    #[error("greeting store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl GreetingRepositoryError {
    /// Wraps a connection failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
