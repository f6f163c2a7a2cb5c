//! Client error report entity.
//!
//! Browsers post uncaught errors and unhandled rejections here. Reports are
//! best-effort diagnostics: oversized fields are truncated rather than
//! rejected, and only a blank message is refused.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{ClientErrorId, Timestamp, ValidationError};

/// Maximum stored message length, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Maximum stored stack trace length, in characters.
pub const MAX_STACK_LENGTH: usize = 8000;

const MAX_SHORT_FIELD_LENGTH: usize = 512;

/// Severity reported by the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorLevel {
    #[default]
    Error,
    Warning,
}

impl ErrorLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorLevel::Error => "error",
            ErrorLevel::Warning => "warning",
        }
    }
}

impl fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(ErrorLevel::Error),
            "warning" | "warn" => Ok(ErrorLevel::Warning),
            other => Err(ValidationError::invalid_format(
                "level",
                format!("unknown level '{}'", other),
            )),
        }
    }
}

/// Unvalidated report fields as received.
#[derive(Debug, Clone, Default)]
pub struct ClientErrorInput {
    pub message: String,
    pub source: Option<String>,
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub stack: Option<String>,
    pub user_agent: Option<String>,
    pub level: ErrorLevel,
}

/// A stored client-side error report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientErrorReport {
    id: ClientErrorId,
    message: String,
    source: Option<String>,
    line: Option<u32>,
    column: Option<u32>,
    stack: Option<String>,
    user_agent: Option<String>,
    level: ErrorLevel,
    received_at: Timestamp,
}

impl ClientErrorReport {
    /// Validate and normalize a report.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the message is blank
    pub fn new(input: ClientErrorInput) -> Result<Self, ValidationError> {
        let message = input.message.trim();
        if message.is_empty() {
            return Err(ValidationError::empty_field("message"));
        }

        Ok(Self {
            id: ClientErrorId::new(),
            message: truncate_chars(message, MAX_MESSAGE_LENGTH),
            source: clean(input.source, MAX_SHORT_FIELD_LENGTH),
            line: input.line,
            column: input.column,
            stack: clean(input.stack, MAX_STACK_LENGTH),
            user_agent: clean(input.user_agent, MAX_SHORT_FIELD_LENGTH),
            level: input.level,
            received_at: Timestamp::now(),
        })
    }

    pub fn id(&self) -> &ClientErrorId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }

    pub fn column(&self) -> Option<u32> {
        self.column
    }

    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub fn level(&self) -> ErrorLevel {
        self.level
    }

    pub fn received_at(&self) -> &Timestamp {
        &self.received_at
    }
}

fn clean(value: Option<String>, max: usize) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(|v| truncate_chars(&v, max))
}

fn truncate_chars(value: &str, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((byte_idx, _)) => value[..byte_idx].to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(message: &str) -> ClientErrorInput {
        ClientErrorInput {
            message: message.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn blank_message_is_rejected() {
        let err = ClientErrorReport::new(input("  ")).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("message"));
    }

    #[test]
    fn message_is_trimmed_and_truncated() {
        let long = format!("  {}  ", "x".repeat(MAX_MESSAGE_LENGTH + 50));
        let report = ClientErrorReport::new(input(&long)).unwrap();
        assert_eq!(report.message().chars().count(), MAX_MESSAGE_LENGTH);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("hi", 5), "hi");
    }

    #[test]
    fn optional_fields_drop_blank_values() {
        let report = ClientErrorReport::new(ClientErrorInput {
            message: "TypeError: x is undefined".to_string(),
            source: Some("   ".to_string()),
            stack: Some("at foo (app.js:1:2)".to_string()),
            line: Some(1),
            column: Some(2),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(report.source(), None);
        assert_eq!(report.stack(), Some("at foo (app.js:1:2)"));
        assert_eq!(report.line(), Some(1));
        assert_eq!(report.level(), ErrorLevel::Error);
    }

    #[test]
    fn level_parses_warn_alias() {
        assert_eq!("WARN".parse::<ErrorLevel>().unwrap(), ErrorLevel::Warning);
        assert!("fatal".parse::<ErrorLevel>().is_err());
    }
}
