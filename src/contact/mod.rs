//! Contact form submissions.
//!
//! A visitor submits a name, an email address and a message. The submission
//! is validated before any store access, appended to the
//! `contact_submissions` table and acknowledged. Submissions are never
//! updated or deleted; an administrative read lists them newest first.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
