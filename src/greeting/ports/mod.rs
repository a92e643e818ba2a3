//! Port contracts for greeting storage.

pub mod repository;

pub use repository::{GreetingRepository, GreetingRepositoryError, GreetingRepositoryResult};
