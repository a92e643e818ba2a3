//! Portfolio: backend for a personal portfolio website.
//!
//! The service serves fixed profile content, a store-backed landing-page
//! greeting and a contact form whose submissions are appended to
//! `PostgreSQL`.
//!
//! # Architecture
//!
//! The two store-backed features follow a hexagonal layout:
//!
//! - **Domain**: validated values with no infrastructure dependencies
//! - **Ports**: repository traits the services depend on
//! - **Adapters**: in-memory and `PostgreSQL` implementations of the ports
//!
//! # Modules
//!
//! - [`contact`]: contact form validation, persistence and listing
//! - [`greeting`]: landing-page greeting with a built-in fallback
//! - [`bootstrap`]: idempotent schema creation and greeting seed
//! - [`profile`]: fixed portfolio content
//! - [`http`]: router, handlers and server loop
//! - [`app`]: composition root used by the `portfolio_api` binary

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod contact;
pub mod greeting;
pub mod http;
pub mod profile;
pub mod store;
pub mod telemetry;
