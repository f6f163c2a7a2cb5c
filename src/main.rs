use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use mood_tracker::adapters::http::{build_router, AppState};
use mood_tracker::adapters::metrics::Metrics;
use mood_tracker::adapters::postgres::{
    connect, run_migrations, PostgresClientErrorRepository, PostgresHealthProbe,
    PostgresMoodRepository,
};
use mood_tracker::config::AppConfig;
use mood_tracker::ports::HealthProbe;
use mood_tracker::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    telemetry::init_tracing(&config.server)
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize tracing")?;

    config.validate().context("Invalid configuration")?;

    info!(
        environment = config.server.environment.as_str(),
        version = env!("CARGO_PKG_VERSION"),
        "mood-tracker starting"
    );

    let database_url = config.database_url()?;
    let pool = connect(&config.database, database_url)
        .await
        .context("Failed to connect to database")?;

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let probes: Vec<Arc<dyn HealthProbe>> = vec![Arc::new(PostgresHealthProbe::new(pool.clone()))];
    let state = AppState::new(
        Arc::new(PostgresMoodRepository::new(pool.clone())),
        Arc::new(PostgresClientErrorRepository::new(pool.clone())),
        probes,
        Arc::new(Metrics::new()),
    );
    let app = build_router(state, &config.server);

    let address = config.server.socket_addr()?;
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Server running on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
