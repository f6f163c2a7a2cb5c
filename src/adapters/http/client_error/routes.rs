//! Route configuration for client error reporting.

use axum::routing::post;
use axum::Router;

use super::handlers::{report_client_error, ClientErrorAppState};

/// Routes:
/// - `POST /api/errors` - Record a browser error report
pub fn client_error_router() -> Router<ClientErrorAppState> {
    Router::new().route("/api/errors", post(report_client_error))
}
