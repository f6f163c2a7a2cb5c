//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence; otherwise `server.log_level` is used as the
//! filter directive. Production defaults to JSON lines for log shippers.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ServerConfig};

pub type TelemetryError = Box<dyn std::error::Error + Send + Sync>;

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &ServerConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match config.effective_log_format() {
        LogFormat::Json => builder
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .try_init(),
        LogFormat::Pretty => builder.try_init(),
    }?;

    Ok(())
}
