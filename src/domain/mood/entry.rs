//! Mood entry aggregate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MoodEntryId, Timestamp};

use super::{Intensity, MoodLabel, Notes};

/// A single journal entry.
///
/// # Invariants
///
/// - `intensity` is within 1-10 (enforced by `Intensity`)
/// - `notes`, when present, are trimmed, non-empty and within the length limit
/// - `updated_at` is never before `created_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    id: MoodEntryId,
    entry_date: NaiveDate,
    mood: MoodLabel,
    intensity: Intensity,
    notes: Option<Notes>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl MoodEntry {
    /// Create a new entry with a fresh id.
    pub fn new(
        entry_date: NaiveDate,
        mood: MoodLabel,
        intensity: Intensity,
        notes: Option<Notes>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: MoodEntryId::new(),
            entry_date,
            mood,
            intensity,
            notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute an entry from persistence (no validation).
    pub fn reconstitute(
        id: MoodEntryId,
        entry_date: NaiveDate,
        mood: MoodLabel,
        intensity: Intensity,
        notes: Option<Notes>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            entry_date,
            mood,
            intensity,
            notes,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &MoodEntryId {
        &self.id
    }

    pub fn entry_date(&self) -> NaiveDate {
        self.entry_date
    }

    pub fn mood(&self) -> MoodLabel {
        self.mood
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_ref().map(Notes::as_str)
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace every user-editable field.
    pub fn revise(
        &mut self,
        entry_date: NaiveDate,
        mood: MoodLabel,
        intensity: Intensity,
        notes: Option<Notes>,
    ) {
        self.entry_date = entry_date;
        self.mood = mood;
        self.intensity = intensity;
        self.notes = notes;

        let now = Timestamp::now();
        if now > self.updated_at {
            self.updated_at = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn intensity(v: i64) -> Intensity {
        Intensity::try_new(v).unwrap()
    }

    #[test]
    fn new_entry_has_matching_timestamps() {
        let entry = MoodEntry::new(date(2024, 3, 1), MoodLabel::Calm, intensity(5), None);
        assert_eq!(entry.created_at(), entry.updated_at());
        assert_eq!(entry.entry_date(), date(2024, 3, 1));
        assert!(entry.notes().is_none());
    }

    #[test]
    fn revise_replaces_fields_and_bumps_updated_at() {
        let mut entry = MoodEntry::new(date(2024, 3, 1), MoodLabel::Calm, intensity(5), None);
        let created = *entry.created_at();
        std::thread::sleep(std::time::Duration::from_millis(5));

        let notes = Notes::parse(Some("rough meeting".to_string())).unwrap();
        entry.revise(date(2024, 3, 2), MoodLabel::Stressed, intensity(8), notes);

        assert_eq!(entry.entry_date(), date(2024, 3, 2));
        assert_eq!(entry.mood(), MoodLabel::Stressed);
        assert_eq!(entry.intensity().value(), 8);
        assert_eq!(entry.notes(), Some("rough meeting"));
        assert_eq!(entry.created_at(), &created);
        assert!(created.is_before(entry.updated_at()));
    }

    #[test]
    fn reconstitute_preserves_identity() {
        let id = MoodEntryId::new();
        let ts = Timestamp::now();
        let entry = MoodEntry::reconstitute(
            id,
            date(2024, 1, 1),
            MoodLabel::Happy,
            intensity(9),
            None,
            ts,
            ts,
        );
        assert_eq!(entry.id(), &id);
    }
}
