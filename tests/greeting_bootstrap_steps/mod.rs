//! Step definitions for greeting bootstrap scenarios.

pub mod given;
pub mod when;
pub mod world;
