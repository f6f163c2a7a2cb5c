//! Shared JSON error body and the API error type handlers return.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::RecordClientErrorError;
use crate::domain::foundation::ValidationError;
use crate::domain::mood::MoodError;

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "field": field })),
        }
    }

    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self {
            code: "INVALID_QUERY".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource, id),
            details: Some(serde_json::json!({ "id": id })),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Generic body for a bare status, e.g. `405` -> `METHOD_NOT_ALLOWED`.
    pub fn from_status(status: StatusCode) -> Self {
        let reason = status.canonical_reason().unwrap_or("Error");
        Self {
            code: reason.to_ascii_uppercase().replace(' ', "_"),
            message: reason.to_string(),
            details: None,
        }
    }
}

/// Fallback for requests that match no route.
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        resource: "Route",
        id: uri.path().to_string(),
    }
}

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Validation { field: String, message: String },
    InvalidQuery(String),
    NotFound { resource: &'static str, id: String },
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation { .. } | ApiError::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MoodError> for ApiError {
    fn from(err: MoodError) -> Self {
        match err {
            MoodError::NotFound(id) => ApiError::NotFound {
                resource: "Mood entry",
                id: id.to_string(),
            },
            MoodError::ValidationFailed { field, message } => {
                ApiError::Validation { field, message }
            }
            MoodError::InvalidQuery(msg) => ApiError::InvalidQuery(msg),
            MoodError::Infrastructure(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<RecordClientErrorError> for ApiError {
    fn from(err: RecordClientErrorError) -> Self {
        match err {
            RecordClientErrorError::Invalid(e) => e.into(),
            RecordClientErrorError::Infrastructure(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            ApiError::BadRequest(msg) => ErrorResponse::bad_request(msg),
            ApiError::Validation { field, message } => ErrorResponse::validation(&field, message),
            ApiError::InvalidQuery(msg) => ErrorResponse::invalid_query(msg),
            ApiError::NotFound { resource, id } => ErrorResponse::not_found(resource, &id),
            ApiError::Internal(msg) => {
                // Infrastructure detail stays in the logs
                tracing::error!(error = %msg, "Request failed with internal error");
                ErrorResponse::internal("An internal error occurred")
            }
        };

        (status, Json(error)).into_response()
    }
}
