//! Port contracts for contact submissions.

pub mod repository;

pub use repository::{ContactRepository, ContactRepositoryError, ContactRepositoryResult};
