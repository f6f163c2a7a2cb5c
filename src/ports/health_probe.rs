//! Health probe port.
//!
//! Each backing dependency (database, queues, ...) exposes one probe. The
//! health endpoint runs every registered probe and reports them by name.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Stable name used in health reports, e.g. `"database"`.
    fn name(&self) -> &'static str;

    /// Returns `Ok(())` when the dependency is reachable.
    async fn check(&self) -> Result<(), DomainError>;
}
