//! `PostgreSQL` adapter for the submission log.

mod models;
mod repository;
mod schema;

pub use repository::PostgresContactRepository;
