//! PostgreSQL health probe.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::HealthProbe;

#[derive(Clone)]
pub struct PostgresHealthProbe {
    pool: PgPool,
}

impl PostgresHealthProbe {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthProbe for PostgresHealthProbe {
    fn name(&self) -> &'static str {
        "database"
    }

    async fn check(&self) -> Result<(), DomainError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| DomainError::new(ErrorCode::HealthCheckFailed, e.to_string()))
    }
}
