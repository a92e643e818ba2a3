//! `PostgreSQL` adapter for the `messages` table.

mod models;
mod repository;
mod schema;

pub use repository::PostgresGreetingRepository;
