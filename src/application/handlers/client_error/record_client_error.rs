//! RecordClientErrorHandler - accepts error reports forwarded by browsers.

use std::sync::Arc;

use crate::domain::client_error::{ClientErrorInput, ClientErrorReport, ErrorLevel};
use crate::domain::foundation::{DomainError, ValidationError};
use crate::ports::ClientErrorRepository;

/// Command to record one client error.
#[derive(Debug, Clone)]
pub struct RecordClientErrorCommand {
    pub input: ClientErrorInput,
}

/// Failure modes for recording a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordClientErrorError {
    Invalid(ValidationError),
    Infrastructure(String),
}

impl std::fmt::Display for RecordClientErrorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordClientErrorError::Invalid(err) => write!(f, "{}", err),
            RecordClientErrorError::Infrastructure(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for RecordClientErrorError {}

impl From<ValidationError> for RecordClientErrorError {
    fn from(err: ValidationError) -> Self {
        RecordClientErrorError::Invalid(err)
    }
}

impl From<DomainError> for RecordClientErrorError {
    fn from(err: DomainError) -> Self {
        RecordClientErrorError::Infrastructure(err.to_string())
    }
}

pub struct RecordClientErrorHandler {
    repository: Arc<dyn ClientErrorRepository>,
}

impl RecordClientErrorHandler {
    pub fn new(repository: Arc<dyn ClientErrorRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RecordClientErrorCommand,
    ) -> Result<ClientErrorReport, RecordClientErrorError> {
        let report = ClientErrorReport::new(cmd.input)?;

        match report.level() {
            ErrorLevel::Error => tracing::error!(
                report_id = %report.id(),
                source = report.source().unwrap_or("unknown"),
                line = report.line(),
                column = report.column(),
                user_agent = report.user_agent().unwrap_or("unknown"),
                "Client error: {}",
                report.message()
            ),
            ErrorLevel::Warning => tracing::warn!(
                report_id = %report.id(),
                source = report.source().unwrap_or("unknown"),
                "Client warning: {}",
                report.message()
            ),
        }

        self.repository.record(&report).await?;
        Ok(report)
    }
}
