//! HTTP adapter for the mood module.
//!
//! # Endpoints
//!
//! - `POST /api/moods` - Log a new entry
//! - `GET /api/moods` - List entries (newest first) with date, mood and paging filters
//! - `GET /api/moods/stats` - Summary statistics over the filtered entries
//! - `GET /api/moods/:id` - Fetch one entry
//! - `PUT /api/moods/:id` - Replace an entry
//! - `DELETE /api/moods/:id` - Remove an entry

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::MoodAppState;
pub use routes::mood_router;
