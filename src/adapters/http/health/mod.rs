//! HTTP adapter for health checks.
//!
//! - `GET /health` - Readiness: runs every dependency probe, `503` on failure
//! - `GET /health/live` - Liveness: process is up, no dependency checks

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::HealthAppState;
pub use routes::health_router;
