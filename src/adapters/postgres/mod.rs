//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresMoodRepository` - Mood entry persistence
//! - `PostgresClientErrorRepository` - Client error report storage
//! - `PostgresHealthProbe` - `SELECT 1` liveness check
//! - `connect` / `run_migrations` - Pool construction and schema setup

mod client_error_repository;
mod health_probe;
mod mood_repository;
mod pool;

pub use client_error_repository::PostgresClientErrorRepository;
pub use health_probe::PostgresHealthProbe;
pub use mood_repository::PostgresMoodRepository;
pub use pool::{connect, run_migrations};
