//! HTTP adapters - REST API implementations.
//!
//! Each module has its own HTTP adapter for endpoint exposure. `router`
//! assembles them behind the shared middleware stack.

pub mod client_error;
pub mod error;
pub mod health;
pub mod metrics;
pub mod middleware;
pub mod mood;
mod router;

// Re-export key types for convenience
pub use error::{ApiError, ErrorResponse};
pub use router::{build_router, AppState};
