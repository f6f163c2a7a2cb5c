//! ListMoodsHandler - Query handler for filtered, paginated listings.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::mood::{MoodEntry, MoodError, MoodLabel};
use crate::ports::{MoodFilter, MoodRepository};

/// Page size used when the caller gives none.
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Largest page size a caller may request.
pub const MAX_LIST_LIMIT: u32 = 200;

/// Query for a page of entries.
#[derive(Debug, Clone, Default)]
pub struct ListMoodsQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub mood: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ListMoodsQuery {
    /// Validate the query and resolve it into a repository filter.
    pub(super) fn into_filter(self) -> Result<MoodFilter, MoodError> {
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                return Err(MoodError::invalid_query(format!(
                    "'from' ({}) is after 'to' ({})",
                    from, to
                )));
            }
        }

        let mood = self
            .mood
            .as_deref()
            .map(str::parse::<MoodLabel>)
            .transpose()?;

        Ok(MoodFilter {
            from: self.from,
            to: self.to,
            mood,
            limit: Some(self.limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT)),
            offset: self.offset.unwrap_or(0),
        })
    }
}

pub struct ListMoodsHandler {
    repository: Arc<dyn MoodRepository>,
}

impl ListMoodsHandler {
    pub fn new(repository: Arc<dyn MoodRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListMoodsQuery) -> Result<Vec<MoodEntry>, MoodError> {
        let filter = query.into_filter()?;
        Ok(self.repository.list(&filter).await?)
    }
}
