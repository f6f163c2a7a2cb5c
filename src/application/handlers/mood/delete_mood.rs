//! DeleteMoodHandler - Command handler for removing an entry.

use std::sync::Arc;

use crate::domain::foundation::MoodEntryId;
use crate::domain::mood::MoodError;
use crate::ports::MoodRepository;

#[derive(Debug, Clone)]
pub struct DeleteMoodCommand {
    pub id: MoodEntryId,
}

pub struct DeleteMoodHandler {
    repository: Arc<dyn MoodRepository>,
}

impl DeleteMoodHandler {
    pub fn new(repository: Arc<dyn MoodRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteMoodCommand) -> Result<(), MoodError> {
        self.repository.delete(&cmd.id).await?;
        tracing::info!(entry_id = %cmd.id, "Mood entry deleted");
        Ok(())
    }
}
