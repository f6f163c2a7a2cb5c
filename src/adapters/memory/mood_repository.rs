//! In-memory implementation of MoodRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, MoodEntryId};
use crate::domain::mood::MoodEntry;
use crate::ports::{MoodFilter, MoodRepository};

#[derive(Debug, Clone, Default)]
pub struct InMemoryMoodRepository {
    entries: Arc<RwLock<HashMap<MoodEntryId, MoodEntry>>>,
}

impl InMemoryMoodRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MoodRepository for InMemoryMoodRepository {
    async fn save(&self, entry: &MoodEntry) -> Result<(), DomainError> {
        self.entries.write().await.insert(*entry.id(), entry.clone());
        Ok(())
    }

    async fn update(&self, entry: &MoodEntry) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        match entries.get_mut(entry.id()) {
            Some(existing) => {
                *existing = entry.clone();
                Ok(())
            }
            None => Err(DomainError::mood_entry_not_found(entry.id())),
        }
    }

    async fn find_by_id(&self, id: &MoodEntryId) -> Result<Option<MoodEntry>, DomainError> {
        Ok(self.entries.read().await.get(id).cloned())
    }

    async fn list(&self, filter: &MoodFilter) -> Result<Vec<MoodEntry>, DomainError> {
        let entries = self.entries.read().await;
        let mut matching: Vec<MoodEntry> = entries
            .values()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            b.entry_date()
                .cmp(&a.entry_date())
                .then_with(|| b.created_at().cmp(a.created_at()))
        });

        let limit = filter.limit.map_or(usize::MAX, |l| l as usize);
        Ok(matching
            .into_iter()
            .skip(filter.offset as usize)
            .take(limit)
            .collect())
    }

    async fn delete(&self, id: &MoodEntryId) -> Result<(), DomainError> {
        match self.entries.write().await.remove(id) {
            Some(_) => Ok(()),
            None => Err(DomainError::mood_entry_not_found(id)),
        }
    }
}
