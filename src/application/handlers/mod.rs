//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod client_error;
pub mod health;
pub mod mood;

pub use client_error::{
    RecordClientErrorCommand, RecordClientErrorError, RecordClientErrorHandler,
};
pub use health::{CheckHealthHandler, HealthReport, HealthStatus, ProbeResult};
pub use mood::{
    CreateMoodCommand, CreateMoodHandler, DeleteMoodCommand, DeleteMoodHandler, GetMoodHandler,
    GetMoodQuery, GetMoodStatsHandler, GetMoodStatsQuery, ListMoodsHandler, ListMoodsQuery,
    MoodInput, UpdateMoodCommand, UpdateMoodHandler,
};
