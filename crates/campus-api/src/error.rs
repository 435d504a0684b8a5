//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use campus_core::Error;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Serialised as `{"error": "<message>", "kind": "<tag>"}`.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub Error);

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self.0 {
      Error::NotFound { .. }
      | Error::UpdateFailed { .. }
      | Error::DeleteFailed { .. } => StatusCode::NOT_FOUND,
      Error::IdCollision { .. } | Error::Store(_) => {
        tracing::error!(error = %self.0, "request failed");
        StatusCode::INTERNAL_SERVER_ERROR
      }
    };
    let body = json!({ "error": self.0.to_string(), "kind": self.0.kind() });
    (status, Json(body)).into_response()
  }
}
