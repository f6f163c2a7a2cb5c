//! HTTP handlers for health endpoints.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::metrics::Metrics;
use crate::application::CheckHealthHandler;
use crate::config::Environment;

use super::dto::{HealthResponse, LivenessResponse};

/// Shared state for health endpoints.
#[derive(Clone)]
pub struct HealthAppState {
    pub checker: Arc<CheckHealthHandler>,
    pub metrics: Arc<Metrics>,
    pub environment: Environment,
}

impl HealthAppState {
    pub fn new(
        checker: Arc<CheckHealthHandler>,
        metrics: Arc<Metrics>,
        environment: Environment,
    ) -> Self {
        Self {
            checker,
            metrics,
            environment,
        }
    }
}

/// GET /health - Run dependency probes
pub async fn health(State(state): State<HealthAppState>) -> impl IntoResponse {
    let report = state.checker.handle().await;
    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = HealthResponse::from_report(
        report,
        state.environment.as_str(),
        state.metrics.uptime().as_secs(),
    );

    (status, Json(body))
}

/// GET /health/live - Process liveness
pub async fn liveness() -> impl IntoResponse {
    Json(LivenessResponse {
        status: "alive",
        version: env!("CARGO_PKG_VERSION"),
    })
}
