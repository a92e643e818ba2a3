//! Application services for contact submissions.

mod submission;

pub use submission::{ContactService, ContactServiceError, ContactServiceResult};
