//! Contact form submission and the administrative listing.

use crate::contact::{
    domain::{ContactForm, ContactSubmission},
    services::ContactServiceError,
};
use crate::http::{ApiError, AppState};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Serialize;
use tracing::debug;

const ACKNOWLEDGEMENT: &str = "Thank you for your message! I will get back to you soon.";

/// Body returned for an accepted submission.
#[derive(Debug, Serialize)]
pub struct Acknowledgement {
    success: bool,
    message: &'static str,
}

/// `POST /api/contact`
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<Acknowledgement>, ApiError> {
    let Json(form) = payload.map_err(|rejection| {
        debug!(error = %rejection, "unreadable contact body");
        ApiError::MalformedBody
    })?;

    state
        .contacts()
        .submit(form)
        .await
        .map_err(|err| match err {
            ContactServiceError::Validation(invalid) => ApiError::from(invalid),
            ContactServiceError::Repository(_) => ApiError::SubmissionFailed,
        })?;

    Ok(Json(Acknowledgement {
        success: true,
        message: ACKNOWLEDGEMENT,
    }))
}

/// `GET /api/admin/contacts`
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactSubmission>>, ApiError> {
    state
        .contacts()
        .list_submissions()
        .await
        .map(Json)
        .map_err(|_| ApiError::Database)
}
