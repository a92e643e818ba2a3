//! Adapter implementations for the greeting repository port.

pub mod memory;
pub mod postgres;
