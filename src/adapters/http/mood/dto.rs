//! HTTP DTOs (Data Transfer Objects) for mood endpoints.
//!
//! These types define the JSON request/response structure for the mood API.
//! They serve as the boundary between HTTP and the application layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::handlers::mood::{GetMoodStatsQuery, ListMoodsQuery};
use crate::application::MoodInput;
use crate::domain::mood::{MoodEntry, MoodLabel};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body for creating or replacing an entry.
#[derive(Debug, Clone, Deserialize)]
pub struct MoodEntryRequest {
    /// Calendar date (`YYYY-MM-DD`); today when omitted.
    #[serde(default, alias = "entry_date")]
    pub date: Option<NaiveDate>,
    pub mood: String,
    pub intensity: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<MoodEntryRequest> for MoodInput {
    fn from(request: MoodEntryRequest) -> Self {
        MoodInput {
            entry_date: request.date,
            mood: request.mood,
            intensity: request.intensity,
            notes: request.notes,
        }
    }
}

/// Query string for `GET /api/moods`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMoodsParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub mood: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl From<ListMoodsParams> for ListMoodsQuery {
    fn from(params: ListMoodsParams) -> Self {
        ListMoodsQuery {
            from: params.from,
            to: params.to,
            mood: params.mood,
            limit: params.limit,
            offset: params.offset,
        }
    }
}

/// Query string for `GET /api/moods/stats`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoodStatsParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub mood: Option<String>,
}

impl From<MoodStatsParams> for GetMoodStatsQuery {
    fn from(params: MoodStatsParams) -> Self {
        GetMoodStatsQuery {
            from: params.from,
            to: params.to,
            mood: params.mood,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A mood entry as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntryResponse {
    pub id: String,
    pub date: NaiveDate,
    pub mood: MoodLabel,
    pub intensity: u8,
    pub notes: Option<String>,
    /// When the entry was created (RFC 3339).
    pub created_at: String,
    /// When the entry was last changed (RFC 3339).
    pub updated_at: String,
}

impl From<&MoodEntry> for MoodEntryResponse {
    fn from(entry: &MoodEntry) -> Self {
        Self {
            id: entry.id().to_string(),
            date: entry.entry_date(),
            mood: entry.mood(),
            intensity: entry.intensity().value(),
            notes: entry.notes().map(str::to_string),
            created_at: entry.created_at().to_rfc3339(),
            updated_at: entry.updated_at().to_rfc3339(),
        }
    }
}
