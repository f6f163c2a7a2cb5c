//! Mood repository port.
//!
//! Defines the contract for persisting and querying mood entries.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, MoodEntryId};
use crate::domain::mood::{MoodEntry, MoodLabel};

/// Repository port for mood entry persistence.
///
/// Implementations must order listings by `entry_date` descending, then
/// `created_at` descending.
#[async_trait]
pub trait MoodRepository: Send + Sync {
    /// Save a new entry.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, entry: &MoodEntry) -> Result<(), DomainError>;

    /// Update an existing entry.
    ///
    /// # Errors
    ///
    /// - `MoodEntryNotFound` if the entry doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, entry: &MoodEntry) -> Result<(), DomainError>;

    /// Find an entry by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &MoodEntryId) -> Result<Option<MoodEntry>, DomainError>;

    /// List entries matching the filter.
    async fn list(&self, filter: &MoodFilter) -> Result<Vec<MoodEntry>, DomainError>;

    /// Delete an entry.
    ///
    /// # Errors
    ///
    /// - `MoodEntryNotFound` if the entry doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &MoodEntryId) -> Result<(), DomainError>;
}

/// Filter for listing entries. Date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub mood: Option<MoodLabel>,
    /// Maximum number of results; `None` returns everything.
    pub limit: Option<u32>,
    pub offset: u32,
}

impl MoodFilter {
    /// Returns true if the entry satisfies the date and mood constraints.
    ///
    /// Pagination is not considered.
    pub fn matches(&self, entry: &MoodEntry) -> bool {
        let date = entry.entry_date();
        self.from.map_or(true, |from| date >= from)
            && self.to.map_or(true, |to| date <= to)
            && self.mood.map_or(true, |mood| entry.mood() == mood)
    }
}
