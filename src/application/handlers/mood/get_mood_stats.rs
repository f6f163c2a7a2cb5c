//! GetMoodStatsHandler - Summary statistics over a journal slice.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::mood::{MoodError, MoodSummary};
use crate::ports::MoodRepository;

use super::ListMoodsQuery;

/// Query for summary statistics. Pagination does not apply.
#[derive(Debug, Clone, Default)]
pub struct GetMoodStatsQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub mood: Option<String>,
}

pub struct GetMoodStatsHandler {
    repository: Arc<dyn MoodRepository>,
}

impl GetMoodStatsHandler {
    pub fn new(repository: Arc<dyn MoodRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetMoodStatsQuery) -> Result<MoodSummary, MoodError> {
        let mut filter = ListMoodsQuery {
            from: query.from,
            to: query.to,
            mood: query.mood,
            ..Default::default()
        }
        .into_filter()?;
        filter.limit = None;
        filter.offset = 0;

        let entries = self.repository.list(&filter).await?;
        Ok(MoodSummary::from_entries(&entries))
    }
}
