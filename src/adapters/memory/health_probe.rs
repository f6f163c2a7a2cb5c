//! Health probe with a fixed, switchable outcome.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::HealthProbe;

#[derive(Debug, Clone)]
pub struct StaticHealthProbe {
    name: &'static str,
    failure: Arc<RwLock<Option<String>>>,
}

impl StaticHealthProbe {
    pub fn healthy(name: &'static str) -> Self {
        Self {
            name,
            failure: Arc::new(RwLock::new(None)),
        }
    }

    pub fn unhealthy(name: &'static str, reason: impl Into<String>) -> Self {
        Self {
            name,
            failure: Arc::new(RwLock::new(Some(reason.into()))),
        }
    }

    /// Switch the probe outcome; `None` makes it healthy.
    pub async fn set_failure(&self, reason: Option<String>) {
        *self.failure.write().await = reason;
    }
}

#[async_trait]
impl HealthProbe for StaticHealthProbe {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn check(&self) -> Result<(), DomainError> {
        match self.failure.read().await.as_ref() {
            None => Ok(()),
            Some(reason) => Err(DomainError::new(ErrorCode::HealthCheckFailed, reason.clone())),
        }
    }
}
