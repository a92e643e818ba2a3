//! Shared world state for contact submission BDD scenarios.

use std::sync::Arc;

use portfolio::contact::{
    adapters::memory::InMemoryContactRepository,
    domain::ContactSubmission,
    services::{ContactService, ContactServiceResult},
};
use rstest::fixture;

/// Scenario world for contact submission behaviour tests.
pub struct ContactWorld {
    pub repository: Arc<InMemoryContactRepository>,
    pub service: ContactService<InMemoryContactRepository>,
    pub last_result: Option<ContactServiceResult<ContactSubmission>>,
    pub listed: Option<Vec<ContactSubmission>>,
}

impl ContactWorld {
    /// Creates a world over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryContactRepository::new());
        Self {
            service: ContactService::new(Arc::clone(&repository)),
            repository,
            last_result: None,
            listed: None,
        }
    }
}

impl Default for ContactWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ContactWorld {
    ContactWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
