//! Mapping of dashboard errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use launchdash_common::LaunchDashError;

/// Handler error. An invalid selection becomes `204 No Content` so the page
/// keeps its previous chart; anything else is a 500.
#[derive(Debug)]
pub struct ApiError(pub LaunchDashError);

impl<E: Into<LaunchDashError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            LaunchDashError::InvalidSelection(msg) => {
                tracing::warn!("no chart update: {}", msg);
                StatusCode::NO_CONTENT.into_response()
            }
            other => {
                tracing::error!("request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": other.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
