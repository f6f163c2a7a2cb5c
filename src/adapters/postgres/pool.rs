//! Connection pool construction and embedded migrations.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Build a pool against `url` using the configured pool settings.
pub async fn connect(config: &DatabaseConfig, url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(Some(config.idle_timeout()))
        .max_lifetime(Some(config.max_lifetime()))
        .connect(url)
        .await?;

    tracing::info!(
        min_connections = config.min_connections,
        max_connections = config.max_connections,
        "Database pool ready"
    );

    Ok(pool)
}

/// Apply migrations embedded from `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
