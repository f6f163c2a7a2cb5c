//! Mood-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, MoodEntryId, ValidationError};

/// Mood-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodError {
    /// Entry was not found.
    NotFound(MoodEntryId),
    /// Input failed validation.
    ValidationFailed { field: String, message: String },
    /// Query parameters are inconsistent.
    InvalidQuery(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl MoodError {
    pub fn not_found(id: MoodEntryId) -> Self {
        MoodError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MoodError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn invalid_query(message: impl Into<String>) -> Self {
        MoodError::InvalidQuery(message.into())
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        MoodError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            MoodError::NotFound(_) => ErrorCode::MoodEntryNotFound,
            MoodError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            MoodError::InvalidQuery(_) => ErrorCode::InvalidQuery,
            MoodError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            MoodError::NotFound(id) => format!("Mood entry not found: {}", id),
            MoodError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            MoodError::InvalidQuery(msg) => format!("Invalid query: {}", msg),
            MoodError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for MoodError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MoodError {}

impl From<ValidationError> for MoodError {
    fn from(err: ValidationError) -> Self {
        MoodError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for MoodError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::MoodEntryNotFound => match err
                .details
                .get("id")
                .and_then(|id| id.parse::<MoodEntryId>().ok())
            {
                Some(id) => MoodError::NotFound(id),
                None => MoodError::Infrastructure(err.to_string()),
            },
            ErrorCode::ValidationFailed => MoodError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::InvalidQuery => MoodError::InvalidQuery(err.message),
            _ => MoodError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_domain_error_maps_to_not_found() {
        let id = MoodEntryId::new();
        let err = DomainError::new(ErrorCode::MoodEntryNotFound, "gone")
            .with_detail("id", id.to_string());
        assert_eq!(MoodError::from(err), MoodError::NotFound(id));
    }

    #[test]
    fn database_error_maps_to_infrastructure() {
        let err = DomainError::database("fetch mood entry", "timeout");
        let mood_err = MoodError::from(err);
        assert!(matches!(mood_err, MoodError::Infrastructure(_)));
        assert_eq!(mood_err.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn validation_error_keeps_field() {
        let err = MoodError::from(ValidationError::out_of_range("intensity", 1, 10, 0));
        match err {
            MoodError::ValidationFailed { field, .. } => assert_eq!(field, "intensity"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn message_mentions_id() {
        let id = MoodEntryId::new();
        assert!(MoodError::not_found(id).message().contains(&id.to_string()));
    }
}
