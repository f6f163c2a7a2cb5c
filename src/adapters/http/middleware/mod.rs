//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `error_body` - JSON bodies for bare error responses
//! - `metrics` - Per-route request counters and latency histograms
//! - `security` - Hardening response headers

pub mod error_body;
pub mod metrics;
pub mod security;

pub use error_body::json_error_body;
pub use metrics::track_metrics;
pub use security::{security_headers, SecurityHeaders};
