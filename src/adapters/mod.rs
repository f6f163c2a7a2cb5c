//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - PostgreSQL persistence and health probe
//! - `memory` - In-memory implementations for tests and local runs
//! - `metrics` - Prometheus counters and histograms
//! - `http` - REST API (routes, DTOs, middleware)

pub mod http;
pub mod memory;
pub mod metrics;
pub mod postgres;
