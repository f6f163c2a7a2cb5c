//! Mood command and query handlers.

mod create_mood;
mod delete_mood;
mod get_mood;
mod get_mood_stats;
mod input;
mod list_moods;
mod update_mood;

pub use create_mood::{CreateMoodCommand, CreateMoodHandler};
pub use delete_mood::{DeleteMoodCommand, DeleteMoodHandler};
pub use get_mood::{GetMoodHandler, GetMoodQuery};
pub use get_mood_stats::{GetMoodStatsHandler, GetMoodStatsQuery};
pub use input::MoodInput;
pub use list_moods::{ListMoodsHandler, ListMoodsQuery, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
pub use update_mood::{UpdateMoodCommand, UpdateMoodHandler};
