//! PostgreSQL implementation of ClientErrorRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::client_error::ClientErrorReport;
use crate::domain::foundation::DomainError;
use crate::ports::ClientErrorRepository;

#[derive(Clone)]
pub struct PostgresClientErrorRepository {
    pool: PgPool,
}

impl PostgresClientErrorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `line`/`col` are BIGINT so every `u32` the browser sends is stored as is.
fn source_position(value: Option<u32>) -> Option<i64> {
    value.map(i64::from)
}

#[async_trait]
impl ClientErrorRepository for PostgresClientErrorRepository {
    async fn record(&self, report: &ClientErrorReport) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO client_errors (
                id, message, source, line, col, stack, user_agent, level, received_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(report.id().as_uuid())
        .bind(report.message())
        .bind(report.source())
        .bind(source_position(report.line()))
        .bind(source_position(report.column()))
        .bind(report.stack())
        .bind(report.user_agent())
        .bind(report.level().as_str())
        .bind(report.received_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("insert client error", e))?;

        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM client_errors")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("count client errors", e))?;

        Ok(count as u64)
    }
}
