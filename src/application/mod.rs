//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write) are kept apart from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Mood handlers
    CreateMoodCommand, CreateMoodHandler, DeleteMoodCommand, DeleteMoodHandler, GetMoodHandler,
    GetMoodQuery, GetMoodStatsHandler, GetMoodStatsQuery, ListMoodsHandler, ListMoodsQuery,
    MoodInput, UpdateMoodCommand, UpdateMoodHandler,
    // Client error handlers
    RecordClientErrorCommand, RecordClientErrorError, RecordClientErrorHandler,
    // Health
    CheckHealthHandler, HealthReport, HealthStatus, ProbeResult,
};
