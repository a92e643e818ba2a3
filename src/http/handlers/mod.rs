//! Request handlers grouped by resource.

pub mod contact;
pub mod content;
pub mod greeting;
pub mod health;

use super::ApiError;
use axum::http::Uri;
use tracing::debug;

/// Answers API paths that match no route.
pub async fn not_found(uri: Uri) -> ApiError {
    debug!(%uri, "no API route matched");
    ApiError::NotFound
}
