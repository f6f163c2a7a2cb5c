//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MoodRepository` - Mood entry persistence and filtered listing
//! - `ClientErrorRepository` - Storage for browser error reports
//! - `HealthProbe` - Dependency liveness check used by `/health`

mod client_error_repository;
mod health_probe;
mod mood_repository;

pub use client_error_repository::ClientErrorRepository;
pub use health_probe::HealthProbe;
pub use mood_repository::{MoodFilter, MoodRepository};
