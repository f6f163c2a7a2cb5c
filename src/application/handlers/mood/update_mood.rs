//! UpdateMoodHandler - Command handler for replacing an entry's fields.

use std::sync::Arc;

use crate::domain::foundation::MoodEntryId;
use crate::domain::mood::{MoodEntry, MoodError};
use crate::ports::MoodRepository;

use super::MoodInput;

/// Command to replace an existing entry.
#[derive(Debug, Clone)]
pub struct UpdateMoodCommand {
    pub id: MoodEntryId,
    pub input: MoodInput,
}

pub struct UpdateMoodHandler {
    repository: Arc<dyn MoodRepository>,
}

impl UpdateMoodHandler {
    pub fn new(repository: Arc<dyn MoodRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateMoodCommand) -> Result<MoodEntry, MoodError> {
        let valid = cmd.input.validate()?;

        let mut entry = self
            .repository
            .find_by_id(&cmd.id)
            .await?
            .ok_or(MoodError::NotFound(cmd.id))?;

        entry.revise(valid.entry_date, valid.mood, valid.intensity, valid.notes);
        self.repository.update(&entry).await?;

        tracing::info!(entry_id = %entry.id(), "Mood entry updated");

        Ok(entry)
    }
}
