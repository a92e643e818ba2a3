//! Shared world state for greeting bootstrap BDD scenarios.

use std::sync::Arc;

use async_trait::async_trait;
use portfolio::bootstrap::{BootstrapReport, InMemorySchema, SchemaError, SchemaManager};
use portfolio::greeting::{
    adapters::memory::InMemoryGreetingRepository,
    domain::Greeting,
    ports::{GreetingRepository, GreetingRepositoryError, GreetingRepositoryResult},
    services::GreetingService,
};
use rstest::fixture;

/// Store double whose every call fails as if the server were down.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnreachableStore;

fn refused() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused")
}

#[async_trait]
impl SchemaManager for UnreachableStore {
    async fn ensure_schema(&self) -> Result<(), SchemaError> {
        Err(SchemaError::new(refused()))
    }
}

#[async_trait]
impl GreetingRepository for UnreachableStore {
    async fn count(&self) -> GreetingRepositoryResult<u64> {
        Err(GreetingRepositoryError::unavailable(refused()))
    }

    async fn insert(&self, _text: &str) -> GreetingRepositoryResult<Greeting> {
        Err(GreetingRepositoryError::unavailable(refused()))
    }

    async fn first(&self) -> GreetingRepositoryResult<Option<Greeting>> {
        Err(GreetingRepositoryError::unavailable(refused()))
    }
}

/// Scenario world for greeting bootstrap behaviour tests.
pub struct GreetingWorld {
    pub repository: Arc<dyn GreetingRepository>,
    pub schema: Arc<dyn SchemaManager>,
    pub service: GreetingService<dyn GreetingRepository>,
    pub reports: Vec<BootstrapReport>,
}

impl GreetingWorld {
    /// Creates a world over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::over(
            Arc::new(InMemoryGreetingRepository::new()),
            Arc::new(InMemorySchema),
        )
    }

    /// Creates a world whose store refuses every connection.
    #[must_use]
    pub fn unreachable() -> Self {
        Self::over(Arc::new(UnreachableStore), Arc::new(UnreachableStore))
    }

    fn over(repository: Arc<dyn GreetingRepository>, schema: Arc<dyn SchemaManager>) -> Self {
        Self {
            service: GreetingService::new(Arc::clone(&repository)),
            repository,
            schema,
            reports: Vec::new(),
        }
    }
}

impl Default for GreetingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> GreetingWorld {
    GreetingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
