//! Client error repository port.

use async_trait::async_trait;

use crate::domain::client_error::ClientErrorReport;
use crate::domain::foundation::DomainError;

/// Persistence for browser-reported errors.
#[async_trait]
pub trait ClientErrorRepository: Send + Sync {
    /// Store a report.
    async fn record(&self, report: &ClientErrorReport) -> Result<(), DomainError>;

    /// Total number of stored reports.
    async fn count(&self) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_error_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ClientErrorRepository) {}
    }
}
