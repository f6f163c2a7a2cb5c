//! Response bodies for health endpoints.

use serde::Serialize;

use crate::application::{HealthReport, HealthStatus, ProbeResult};

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    pub environment: &'static str,
    pub uptime_seconds: u64,
    pub checks: Vec<ProbeResult>,
    /// When the probes ran (RFC 3339).
    pub timestamp: String,
}

impl HealthResponse {
    pub fn from_report(
        report: HealthReport,
        environment: &'static str,
        uptime_seconds: u64,
    ) -> Self {
        Self {
            status: report.status,
            version: env!("CARGO_PKG_VERSION"),
            environment,
            uptime_seconds,
            timestamp: report.checked_at.to_rfc3339(),
            checks: report.checks,
        }
    }
}

/// Body of `GET /health/live`.
#[derive(Debug, Clone, Serialize)]
pub struct LivenessResponse {
    pub status: &'static str,
    pub version: &'static str,
}
