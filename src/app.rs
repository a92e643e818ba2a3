//! Composition root: wires the store, services and router, then serves.

use crate::bootstrap;
use crate::config::{AppConfig, ConfigError};
use crate::contact::{
    adapters::postgres::PostgresContactRepository, ports::ContactRepository,
    services::ContactService,
};
use crate::greeting::{
    adapters::postgres::PostgresGreetingRepository, ports::GreetingRepository,
    services::GreetingService,
};
use crate::http::{self, AppState};
use crate::store::{PostgresSchema, build_pool};
use crate::telemetry::TelemetryError;
use mockable::{Clock, DefaultClock};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Errors that stop the service.
#[derive(Debug, Error)]
pub enum AppError {
    /// A configuration variable could not be parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Logging could not be initialised.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    /// The listen address could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested.
        addr: SocketAddr,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The accept loop failed.
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

/// Runs the service until a shutdown signal arrives.
///
/// The listener is bound before bootstrap so that clients queue instead of
/// being refused while the store is prepared. Bootstrap failures leave the
/// service running in degraded mode.
///
/// # Errors
///
/// Returns [`AppError::Bind`] when the port is taken and
/// [`AppError::Serve`] when the accept loop fails.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    info!(
        environment = %config.environment,
        database = ?config.database,
        "starting portfolio API"
    );

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })?;
    info!(%addr, "listening");

    let pool = build_pool(&config.database);
    let contacts: Arc<dyn ContactRepository> =
        Arc::new(PostgresContactRepository::new(pool.clone()));
    let greetings: Arc<dyn GreetingRepository> =
        Arc::new(PostgresGreetingRepository::new(pool.clone()));
    let greeting_service = GreetingService::new(greetings);

    let report = bootstrap::run(&PostgresSchema::new(pool), &greeting_service).await;
    if report.is_degraded() {
        warn!(?report, "store not ready; serving in degraded mode");
    }

    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(DefaultClock);
    let state = AppState::new(
        ContactService::new(contacts),
        greeting_service,
        clock,
        config.environment,
    );
    let app = http::router(state, config.static_dir.as_deref());

    http::serve(listener, app).await.map_err(AppError::Serve)?;
    info!("server stopped");
    Ok(())
}
