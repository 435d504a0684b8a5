//! Handlers for `/submissions` endpoints.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use campus_core::{
  Campus,
  schema::{NewSubmission, Submission, SubmissionPatch},
  store::Backend,
};

use crate::error::ApiError;

/// `GET /submissions`
pub async fn list<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
) -> Result<Json<Vec<Submission>>, ApiError> {
  Ok(Json(campus.submissions.list().await?))
}

/// `GET /submissions/:id`
pub async fn get_one<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
  Path(id): Path<String>,
) -> Result<Json<Submission>, ApiError> {
  Ok(Json(campus.submissions.get(&id).await?))
}

/// `POST /submissions` — body: `{"student":{...},"assignment":{...},"task":[...]}`.
/// Both snapshots are required; the extractor rejects a body missing either.
pub async fn create<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
  Json(body): Json<NewSubmission>,
) -> Result<impl IntoResponse, ApiError> {
  let submission = campus.submissions.create(body).await?;
  Ok((StatusCode::CREATED, Json(submission)))
}

/// `PUT /submissions/:id`
pub async fn update<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
  Path(id): Path<String>,
  Json(body): Json<NewSubmission>,
) -> Result<Json<Submission>, ApiError> {
  let patch = SubmissionPatch {
    student:    Some(body.student),
    assignment: Some(body.assignment),
    task:       Some(body.task),
  };
  Ok(Json(campus.submissions.update(&id, patch).await?))
}

/// `DELETE /submissions/:id`
pub async fn delete<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
  Path(id): Path<String>,
) -> Result<Json<Submission>, ApiError> {
  Ok(Json(campus.submissions.delete(&id).await?))
}
