//! In-memory contact repository for tests and store-less runs.

mod repository;

pub use repository::InMemoryContactRepository;
