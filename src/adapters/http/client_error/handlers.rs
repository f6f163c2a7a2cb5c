//! HTTP handler for client error reports.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::metrics::Metrics;
use crate::application::{RecordClientErrorCommand, RecordClientErrorHandler};
use crate::ports::ClientErrorRepository;

use super::dto::{ClientErrorAccepted, ClientErrorRequest};

/// Shared state for the error reporting endpoint.
#[derive(Clone)]
pub struct ClientErrorAppState {
    pub repository: Arc<dyn ClientErrorRepository>,
    pub metrics: Arc<Metrics>,
}

impl ClientErrorAppState {
    pub fn new(repository: Arc<dyn ClientErrorRepository>, metrics: Arc<Metrics>) -> Self {
        Self {
            repository,
            metrics,
        }
    }

    pub fn record_client_error_handler(&self) -> RecordClientErrorHandler {
        RecordClientErrorHandler::new(self.repository.clone())
    }
}

/// POST /api/errors - Record a browser error report
pub async fn report_client_error(
    State(state): State<ClientErrorAppState>,
    headers: HeaderMap,
    body: Result<Json<ClientErrorRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;

    let header_user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let input = request.into_input(header_user_agent)?;

    let report = state
        .record_client_error_handler()
        .handle(RecordClientErrorCommand { input })
        .await?;
    state.metrics.inc_client_errors_reported();

    let response = ClientErrorAccepted {
        id: report.id().to_string(),
        message: "Error report received".to_string(),
    };

    Ok((StatusCode::ACCEPTED, Json(response)))
}
