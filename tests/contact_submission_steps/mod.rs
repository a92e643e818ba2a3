//! Step definitions for contact submission scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
