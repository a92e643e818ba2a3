//! Error types for contact form validation.

use super::ContactField;
use thiserror::Error;

/// Errors returned while validating a contact form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactDomainError {
    /// One or more required fields are absent or empty.
    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<ContactField>),

    /// A field exceeds the length its column can hold.
    #[error("{field} must be at most {max} characters")]
    FieldTooLong {
        /// The offending field.
        field: ContactField,
        /// Maximum number of characters accepted.
        max: usize,
    },
}

fn join_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
