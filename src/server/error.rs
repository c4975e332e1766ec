//! HTTP mapping of engine errors.
//!
//! Every failure reaches the client as `{"error": <message>}` with a status
//! code chosen by [`status_code`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::StemLifeError;

/// Status code reported for an engine error
pub fn status_code(err: &StemLifeError) -> StatusCode {
    match err {
        StemLifeError::PlayerNotFound | StemLifeError::NoEventsAvailable => StatusCode::NOT_FOUND,
        StemLifeError::InvalidState
        | StemLifeError::InvalidIndex { .. }
        | StemLifeError::MalformedInput(_) => StatusCode::BAD_REQUEST,
        StemLifeError::AlreadyExists => StatusCode::CONFLICT,
        StemLifeError::Unauthenticated => StatusCode::UNAUTHORIZED,
        StemLifeError::EventNotFound(_)
        | StemLifeError::InvalidCatalog(_)
        | StemLifeError::Deserialization(_)
        | StemLifeError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// JSON error body with the given status
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = json!({ "error": message.into() });
    (status, Json(body)).into_response()
}

impl IntoResponse for StemLifeError {
    fn into_response(self) -> Response {
        let status = status_code(&self);
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        error_response(status, self.to_string())
    }
}
