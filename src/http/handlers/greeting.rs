//! Landing-page greeting.

use crate::greeting::domain::CurrentGreeting;
use crate::http::AppState;
use axum::{Json, extract::State};

/// `GET /api/message`
///
/// Always succeeds; store failures yield the fallback greeting.
pub async fn current_greeting(State(state): State<AppState>) -> Json<CurrentGreeting> {
    Json(state.greetings().current().await)
}
