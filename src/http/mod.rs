//! HTTP surface: routing, shared state, error mapping and the server loop.
//!
//! Every API route lives under `/api`. When a static directory is
//! configured, all other paths are served from it with `index.html` as the
//! single-page fallback.

mod error;
mod handlers;
mod server;
mod state;

pub use error::ApiError;
pub use server::{serve, serve_until, shutdown_signal};
pub use state::AppState;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use std::path::Path;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

const CORS_MAX_AGE: Duration = Duration::from_secs(60 * 60);

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/message", get(handlers::greeting::current_greeting))
        .route("/contact", post(handlers::contact::submit_contact))
        .route("/admin/contacts", get(handlers::contact::list_contacts))
        .route("/contact-info", get(handlers::content::contact_info))
        .route("/profile", get(handlers::content::profile))
        .route("/skills", get(handlers::content::skills))
        .route("/projects", get(handlers::content::projects))
        .route("/experience", get(handlers::content::experience))
        .route("/blog", get(handlers::content::blog_posts))
        .route("/blog/:id", get(handlers::content::blog_post))
        .route("/testimonials", get(handlers::content::testimonials))
        .fallback(handlers::not_found)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(CORS_MAX_AGE)
}

/// Builds the application router.
///
/// `static_dir`, when given, is served for every non-API path.
#[must_use]
pub fn router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut app = Router::new().nest("/api", api_routes());

    if let Some(dir) = static_dir {
        let index = ServeFile::new(dir.join("index.html"));
        app = app.fallback_service(ServeDir::new(dir).fallback(index));
    }

    app.layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
