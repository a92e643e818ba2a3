//! Unit tests for the greeting context.
