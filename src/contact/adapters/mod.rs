//! Adapter implementations for the contact repository port.

pub mod memory;
pub mod postgres;
