//! Landing-page greeting stored in the `messages` table.
//!
//! The table holds a single greeting seeded at startup. Reads never fail:
//! an empty table or an unreachable store yields [`domain::DEFAULT_GREETING`]
//! so the landing page always renders.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
