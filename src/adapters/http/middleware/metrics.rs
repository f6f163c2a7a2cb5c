//! Request metrics middleware.
//!
//! Records every request against its matched route template so that ids in
//! paths do not become label values. Requests served by the router fallback
//! share the `unmatched` label.
//!
//! # Example
//!
//! ```ignore
//! let app = Router::new()
//!     .route("/api/moods/:id", get(handler))
//!     .fallback(route_not_found)
//!     .layer(middleware::from_fn_with_state(metrics, track_metrics));
//! ```

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{MatchedPath, Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::adapters::metrics::Metrics;

/// Label used when no route matched.
const UNMATCHED: &str = "unmatched";

pub async fn track_metrics(
    State(metrics): State<Arc<Metrics>>,
    request: Request,
    next: Next,
) -> Response {
    let started = Instant::now();
    let method = request.method().as_str().to_owned();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED.to_owned());

    let response = next.run(request).await;

    metrics.record_request(&method, &path, response.status().as_u16(), started.elapsed());
    response
}
