//! Mapping from handler failures to JSON error responses.

use crate::contact::domain::{ContactDomainError, ContactField};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Error returned by API handlers.
///
/// The display string is the public `error` message; causes are logged by
/// the services and never echoed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A contact field was absent, null or empty.
    #[error("All fields are required")]
    MissingFields,

    /// A contact field exceeds its column length.
    #[error("{field} must be at most {max} characters")]
    FieldTooLong {
        /// Offending field.
        field: ContactField,
        /// Maximum length in characters.
        max: usize,
    },

    /// The body was not a JSON object of strings.
    #[error("Malformed request body")]
    MalformedBody,

    /// The contact submission could not be stored.
    #[error("Failed to send message")]
    SubmissionFailed,

    /// An administrative read failed.
    #[error("Database error")]
    Database,

    /// No blog post has the requested id.
    #[error("Blog post not found")]
    BlogPostNotFound,

    /// No API route matched.
    #[error("Not found")]
    NotFound,
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields | Self::FieldTooLong { .. } | Self::MalformedBody => {
                StatusCode::BAD_REQUEST
            }
            Self::SubmissionFailed | Self::Database => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BlogPostNotFound | Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<ContactDomainError> for ApiError {
    fn from(err: ContactDomainError) -> Self {
        match err {
            ContactDomainError::MissingFields(_) => Self::MissingFields,
            ContactDomainError::FieldTooLong { field, max } => Self::FieldTooLong { field, max },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
