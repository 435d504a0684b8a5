//! Handlers for `/assignments` endpoints.
//!
//! Create and update both take the full `{name, subject, task}` triple; the
//! subject is an embedded snapshot, not an id.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use campus_core::{
  Campus,
  schema::{Assignment, AssignmentPatch, NewAssignment},
  store::Backend,
};

use crate::error::ApiError;

/// `GET /assignments`
pub async fn list<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
) -> Result<Json<Vec<Assignment>>, ApiError> {
  Ok(Json(campus.assignments.list().await?))
}

/// `GET /assignments/:id`
pub async fn get_one<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
  Path(id): Path<String>,
) -> Result<Json<Assignment>, ApiError> {
  Ok(Json(campus.assignments.get(&id).await?))
}

/// `POST /assignments` — `iscompleted` and `issubmitted` start out `false`.
pub async fn create<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
  Json(body): Json<NewAssignment>,
) -> Result<impl IntoResponse, ApiError> {
  let assignment = campus.assignments.create(body).await?;
  Ok((StatusCode::CREATED, Json(assignment)))
}

/// `PUT /assignments/:id`
pub async fn update<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
  Path(id): Path<String>,
  Json(body): Json<NewAssignment>,
) -> Result<Json<Assignment>, ApiError> {
  let patch = AssignmentPatch {
    name:    Some(body.name),
    subject: Some(body.subject),
    task:    Some(body.task),
  };
  Ok(Json(campus.assignments.update(&id, patch).await?))
}

/// `DELETE /assignments/:id`
pub async fn delete<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
  Path(id): Path<String>,
) -> Result<Json<Assignment>, ApiError> {
  Ok(Json(campus.assignments.delete(&id).await?))
}
