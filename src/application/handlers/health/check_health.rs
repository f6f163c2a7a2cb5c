//! CheckHealthHandler - runs every dependency probe for `/health`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::domain::foundation::Timestamp;
use crate::ports::HealthProbe;

/// Aggregate health state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Outcome of a single probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub name: &'static str,
    pub status: HealthStatus,
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of running every probe.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub checks: Vec<ProbeResult>,
    pub checked_at: Timestamp,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

pub struct CheckHealthHandler {
    probes: Vec<Arc<dyn HealthProbe>>,
    timeout: Duration,
}

impl CheckHealthHandler {
    pub fn new(probes: Vec<Arc<dyn HealthProbe>>, timeout: Duration) -> Self {
        Self { probes, timeout }
    }

    /// Run all probes concurrently. A probe exceeding the timeout is unhealthy.
    pub async fn handle(&self) -> HealthReport {
        let mut tasks = tokio::task::JoinSet::new();
        for (index, probe) in self.probes.iter().cloned().enumerate() {
            let timeout = self.timeout;
            tasks.spawn(async move { (index, run_probe(probe, timeout).await) });
        }

        let mut results: Vec<(usize, ProbeResult)> = Vec::with_capacity(self.probes.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(result) => results.push(result),
                Err(e) => tracing::error!("Health probe task failed: {}", e),
            }
        }
        results.sort_by_key(|(index, _)| *index);
        let checks: Vec<ProbeResult> = results.into_iter().map(|(_, r)| r).collect();

        let all_ran = checks.len() == self.probes.len();
        let status = if all_ran && checks.iter().all(|c| c.status == HealthStatus::Healthy) {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        };

        if status == HealthStatus::Unhealthy {
            tracing::warn!(checks = ?checks, "Health check failed");
        }

        HealthReport {
            status,
            checks,
            checked_at: Timestamp::now(),
        }
    }
}

async fn run_probe(probe: Arc<dyn HealthProbe>, timeout: Duration) -> ProbeResult {
    let started = Instant::now();
    let outcome = tokio::time::timeout(timeout, probe.check()).await;
    let latency_ms = started.elapsed().as_millis() as u64;

    let error = match outcome {
        Ok(Ok(())) => None,
        Ok(Err(e)) => Some(e.message),
        Err(_) => Some(format!("timed out after {}ms", timeout.as_millis())),
    };

    ProbeResult {
        name: probe.name(),
        status: if error.is_none() {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        },
        latency_ms,
        error,
    }
}
