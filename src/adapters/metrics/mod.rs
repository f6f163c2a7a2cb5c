//! Prometheus metrics.
//!
//! Counters and histograms are kept in process and rendered in the
//! Prometheus text exposition format (0.0.4) at `/metrics`.

mod registry;

pub use registry::{Metrics, DURATION_BUCKETS};
