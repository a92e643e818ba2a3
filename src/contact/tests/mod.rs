//! Unit tests for contact submissions.
