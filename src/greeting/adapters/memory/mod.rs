//! In-memory greeting repository for tests and store-less runs.

mod repository;

pub use repository::InMemoryGreetingRepository;
