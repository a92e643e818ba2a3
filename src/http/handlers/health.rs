//! Liveness probe.

use crate::http::AppState;
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Body of `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    status: &'static str,
    message: &'static str,
    timestamp: DateTime<Utc>,
    version: &'static str,
    environment: String,
}

/// `GET /api/health`
///
/// Reports liveness only; the store is not probed.
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "OK",
        message: "Backend is running",
        timestamp: state.now(),
        version: env!("CARGO_PKG_VERSION"),
        environment: state.environment().to_string(),
    })
}
