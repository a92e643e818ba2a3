//! Log subscriber setup.
//!
//! Filtering follows `RUST_LOG` (default `info`). `LOG_FORMAT=json` switches
//! to one JSON object per line for log shippers.

use crate::config::ConfigError;
use std::str::FromStr;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Newline-delimited JSON.
    Json,
}

impl LogFormat {
    /// Reads `LOG_FORMAT` through `lookup`; unset or empty means text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for values other than `text` and `json`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("LOG_FORMAT")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map_or(Ok(Self::Text), |raw| {
                raw.parse().map_err(|reason: String| ConfigError {
                    key: "LOG_FORMAT",
                    value: raw.clone(),
                    reason,
                })
            })
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err("expected text or json".to_owned()),
        }
    }
}

/// Failure while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// `LOG_FORMAT` holds an unknown value.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A global subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    Install(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns [`TelemetryError::Install`] when called more than once.
pub fn init(format: LogFormat) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match format {
        LogFormat::Text => builder.try_init()?,
        LogFormat::Json => builder.json().try_init()?,
    }
    Ok(())
}
