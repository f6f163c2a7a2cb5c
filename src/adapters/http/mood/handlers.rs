//! HTTP handlers for mood endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::metrics::Metrics;
use crate::application::handlers::mood::{
    CreateMoodCommand, CreateMoodHandler, DeleteMoodCommand, DeleteMoodHandler, GetMoodHandler,
    GetMoodQuery, GetMoodStatsHandler, ListMoodsHandler, UpdateMoodCommand, UpdateMoodHandler,
};
use crate::domain::foundation::MoodEntryId;
use crate::ports::MoodRepository;

use super::dto::{ListMoodsParams, MoodEntryRequest, MoodEntryResponse, MoodStatsParams};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for mood endpoints.
#[derive(Clone)]
pub struct MoodAppState {
    pub repository: Arc<dyn MoodRepository>,
    pub metrics: Arc<Metrics>,
}

impl MoodAppState {
    pub fn new(repository: Arc<dyn MoodRepository>, metrics: Arc<Metrics>) -> Self {
        Self {
            repository,
            metrics,
        }
    }

    pub fn create_mood_handler(&self) -> CreateMoodHandler {
        CreateMoodHandler::new(self.repository.clone())
    }

    pub fn get_mood_handler(&self) -> GetMoodHandler {
        GetMoodHandler::new(self.repository.clone())
    }

    pub fn list_moods_handler(&self) -> ListMoodsHandler {
        ListMoodsHandler::new(self.repository.clone())
    }

    pub fn update_mood_handler(&self) -> UpdateMoodHandler {
        UpdateMoodHandler::new(self.repository.clone())
    }

    pub fn delete_mood_handler(&self) -> DeleteMoodHandler {
        DeleteMoodHandler::new(self.repository.clone())
    }

    pub fn mood_stats_handler(&self) -> GetMoodStatsHandler {
        GetMoodStatsHandler::new(self.repository.clone())
    }
}

fn parse_id(raw: &str) -> Result<MoodEntryId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid mood entry ID format: {}", raw)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/moods - Log a new entry
pub async fn create_mood(
    State(state): State<MoodAppState>,
    body: Result<Json<MoodEntryRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;

    let entry = state
        .create_mood_handler()
        .handle(CreateMoodCommand {
            input: request.into(),
        })
        .await?;
    state.metrics.inc_mood_entries_created();

    Ok((StatusCode::CREATED, Json(MoodEntryResponse::from(&entry))))
}

/// PUT /api/moods/:id - Replace an entry
pub async fn update_mood(
    State(state): State<MoodAppState>,
    Path(id): Path<String>,
    body: Result<Json<MoodEntryRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let Json(request) = body?;

    let entry = state
        .update_mood_handler()
        .handle(UpdateMoodCommand {
            id,
            input: request.into(),
        })
        .await?;

    Ok(Json(MoodEntryResponse::from(&entry)))
}

/// DELETE /api/moods/:id - Remove an entry
pub async fn delete_mood(
    State(state): State<MoodAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    state
        .delete_mood_handler()
        .handle(DeleteMoodCommand { id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/moods/:id - Fetch one entry
pub async fn get_mood(
    State(state): State<MoodAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let entry = state.get_mood_handler().handle(GetMoodQuery { id }).await?;

    Ok(Json(MoodEntryResponse::from(&entry)))
}

/// GET /api/moods - List entries, newest first
pub async fn list_moods(
    State(state): State<MoodAppState>,
    params: Result<Query<ListMoodsParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let entries = state.list_moods_handler().handle(params.into()).await?;

    let body: Vec<MoodEntryResponse> = entries.iter().map(MoodEntryResponse::from).collect();
    Ok(Json(body))
}

/// GET /api/moods/stats - Summary statistics
pub async fn mood_stats(
    State(state): State<MoodAppState>,
    params: Result<Query<MoodStatsParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let summary = state.mood_stats_handler().handle(params.into()).await?;

    Ok(Json(summary))
}
