//! Request/response types for `POST /api/errors`.
//!
//! Field aliases accept the names browsers use on `ErrorEvent`
//! (`filename`, `lineno`, `colno`) as well as a camel-cased `userAgent`.

use serde::{Deserialize, Serialize};

use crate::domain::client_error::{ClientErrorInput, ErrorLevel};
use crate::domain::foundation::ValidationError;

/// An error report posted by the frontend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientErrorRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default, alias = "url", alias = "filename")]
    pub source: Option<String>,
    #[serde(default, alias = "lineno")]
    pub line: Option<u32>,
    #[serde(default, alias = "colno")]
    pub column: Option<u32>,
    #[serde(default)]
    pub stack: Option<String>,
    #[serde(default, alias = "userAgent")]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
}

impl ClientErrorRequest {
    /// Convert into domain input, using `header_user_agent` when the body has none.
    pub fn into_input(
        self,
        header_user_agent: Option<String>,
    ) -> Result<ClientErrorInput, ValidationError> {
        let level = match self.level.as_deref() {
            Some(raw) => raw.parse::<ErrorLevel>()?,
            None => ErrorLevel::default(),
        };

        Ok(ClientErrorInput {
            message: self.message,
            source: self.source,
            line: self.line,
            column: self.column,
            stack: self.stack,
            user_agent: self.user_agent.or(header_user_agent),
            level,
        })
    }
}

/// Acknowledgement for an accepted report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientErrorAccepted {
    pub id: String,
    pub message: String,
}
