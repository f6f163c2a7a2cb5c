//! In-memory adapters for testing and development.
//!
//! Not suitable for production: state lives in the process and is lost on
//! restart.

mod client_error_repository;
mod health_probe;
mod mood_repository;

pub use client_error_repository::InMemoryClientErrorRepository;
pub use health_probe::StaticHealthProbe;
pub use mood_repository::InMemoryMoodRepository;
