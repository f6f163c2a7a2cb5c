//! Raw entry fields shared by create and update commands.

use chrono::NaiveDate;

use crate::domain::foundation::Timestamp;
use crate::domain::mood::{Intensity, MoodError, MoodLabel, Notes};

/// User-supplied entry fields before validation.
#[derive(Debug, Clone, Default)]
pub struct MoodInput {
    /// Calendar date of the entry; defaults to today (UTC).
    pub entry_date: Option<NaiveDate>,
    pub mood: String,
    pub intensity: i64,
    pub notes: Option<String>,
}

/// Validated entry fields.
#[derive(Debug)]
pub(super) struct ValidMood {
    pub entry_date: NaiveDate,
    pub mood: MoodLabel,
    pub intensity: Intensity,
    pub notes: Option<Notes>,
}

impl MoodInput {
    pub(super) fn validate(self) -> Result<ValidMood, MoodError> {
        let mood: MoodLabel = self.mood.parse()?;
        let intensity = Intensity::try_new(self.intensity)?;
        let notes = Notes::parse(self.notes)?;

        Ok(ValidMood {
            entry_date: self.entry_date.unwrap_or_else(|| Timestamp::now().date()),
            mood,
            intensity,
            notes,
        })
    }
}
