//! HTTP adapter for browser error reports.
//!
//! - `POST /api/errors` - Accept a report and respond `202 Accepted`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ClientErrorAppState;
pub use routes::client_error_router;
