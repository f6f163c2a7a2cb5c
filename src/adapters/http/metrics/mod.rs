//! Prometheus scrape endpoint.
//!
//! - `GET /metrics` - Text exposition format 0.0.4

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use crate::adapters::metrics::Metrics;

const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub fn metrics_router() -> Router<Arc<Metrics>> {
    Router::new().route("/metrics", get(render_metrics))
}

/// GET /metrics - Render the registry
pub async fn render_metrics(State(metrics): State<Arc<Metrics>>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, CONTENT_TYPE)], metrics.render())
}
