//! CreateMoodHandler - Command handler for logging a new mood entry.

use std::sync::Arc;

use crate::domain::mood::{MoodEntry, MoodError};
use crate::ports::MoodRepository;

use super::MoodInput;

/// Command to create a new entry.
#[derive(Debug, Clone)]
pub struct CreateMoodCommand {
    pub input: MoodInput,
}

/// Handler for creating entries.
pub struct CreateMoodHandler {
    repository: Arc<dyn MoodRepository>,
}

impl CreateMoodHandler {
    pub fn new(repository: Arc<dyn MoodRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateMoodCommand) -> Result<MoodEntry, MoodError> {
        let valid = cmd.input.validate()?;
        let entry = MoodEntry::new(valid.entry_date, valid.mood, valid.intensity, valid.notes);

        self.repository.save(&entry).await?;

        tracing::info!(
            entry_id = %entry.id(),
            mood = %entry.mood(),
            intensity = entry.intensity().value(),
            "Mood entry created"
        );

        Ok(entry)
    }
}
