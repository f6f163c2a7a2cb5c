//! Route configuration for health endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{health, liveness, HealthAppState};

pub fn health_router() -> Router<HealthAppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/live", get(liveness))
}
