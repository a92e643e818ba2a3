//! Domain model for contact form submissions.
//!
//! Validation lives here so that the HTTP boundary and the services share a
//! single definition of a well-formed submission.

mod error;
mod ids;
mod submission;

pub use error::ContactDomainError;
pub use ids::SubmissionId;
pub use submission::{
    ContactField, ContactForm, ContactSubmission, NewContactSubmission, PersistedSubmissionData,
};
