//! Portfolio API server.
//!
//! Reads its configuration from the environment, prepares the store and
//! serves the API (and, with `STATIC_DIR`, the frontend) until Ctrl+C or
//! SIGTERM.

use portfolio::app::{self, AppError};
use portfolio::config::AppConfig;
use portfolio::telemetry::{self, LogFormat};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    telemetry::init(LogFormat::from_lookup(|key| std::env::var(key).ok())?)?;
    let config = AppConfig::from_env()?;
    app::run(config).await
}
