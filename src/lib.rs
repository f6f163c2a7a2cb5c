//! Mood Tracker - mood journal backend.
//!
//! A CRUD API for daily mood entries with summary statistics, plus the
//! operational surface a deployed service needs: `/health` for container
//! healthchecks, `/metrics` for Prometheus and `/api/errors` for browser
//! error reports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
