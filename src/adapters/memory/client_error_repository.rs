//! In-memory implementation of ClientErrorRepository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::client_error::ClientErrorReport;
use crate::domain::foundation::DomainError;
use crate::ports::ClientErrorRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryClientErrorRepository {
    reports: Arc<RwLock<Vec<ClientErrorReport>>>,
}

impl InMemoryClientErrorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of stored reports, oldest first.
    pub async fn reports(&self) -> Vec<ClientErrorReport> {
        self.reports.read().await.clone()
    }
}

#[async_trait]
impl ClientErrorRepository for InMemoryClientErrorRepository {
    async fn record(&self, report: &ClientErrorReport) -> Result<(), DomainError> {
        self.reports.write().await.push(report.clone());
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.reports.read().await.len() as u64)
    }
}
