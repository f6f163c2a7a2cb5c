//! Route configuration for mood endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    create_mood, delete_mood, get_mood, list_moods, mood_stats, update_mood, MoodAppState,
};

/// Creates the mood router with all endpoints.
///
/// Routes:
/// - `GET /api/moods` / `POST /api/moods`
/// - `GET /api/moods/stats`
/// - `GET /api/moods/:id` / `PUT /api/moods/:id` / `DELETE /api/moods/:id`
pub fn mood_router() -> Router<MoodAppState> {
    Router::new()
        .route("/api/moods", get(list_moods).post(create_mood))
        .route("/api/moods/stats", get(mood_stats))
        .route(
            "/api/moods/:id",
            get(get_mood).put(update_mood).delete(delete_mood),
        )
}
