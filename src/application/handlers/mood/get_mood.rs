//! GetMoodHandler - Query handler for a single entry.

use std::sync::Arc;

use crate::domain::foundation::MoodEntryId;
use crate::domain::mood::{MoodEntry, MoodError};
use crate::ports::MoodRepository;

/// Query for a single entry.
#[derive(Debug, Clone)]
pub struct GetMoodQuery {
    pub id: MoodEntryId,
}

pub struct GetMoodHandler {
    repository: Arc<dyn MoodRepository>,
}

impl GetMoodHandler {
    pub fn new(repository: Arc<dyn MoodRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetMoodQuery) -> Result<MoodEntry, MoodError> {
        self.repository
            .find_by_id(&query.id)
            .await?
            .ok_or(MoodError::NotFound(query.id))
    }
}
