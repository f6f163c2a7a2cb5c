//! JSON bodies for bare error responses.
//!
//! Responses produced outside the handlers, such as a `405` from method
//! routing or a `408` from the timeout layer, carry no body. This fills in
//! the standard `ErrorResponse` so every failure has the same shape.
//! Responses that already declare a content type pass through untouched.

use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error::ErrorResponse;

pub async fn json_error_body(response: Response) -> Response {
    let status = response.status();
    let is_error = status.is_client_error() || status.is_server_error();
    if !is_error || response.headers().contains_key(header::CONTENT_TYPE) {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    let (json_parts, body) = Json(ErrorResponse::from_status(status))
        .into_response()
        .into_parts();

    parts.headers.remove(header::CONTENT_LENGTH);
    if let Some(content_type) = json_parts.headers.get(header::CONTENT_TYPE) {
        parts
            .headers
            .insert(header::CONTENT_TYPE, content_type.clone());
    }

    Response::from_parts(parts, body)
}
