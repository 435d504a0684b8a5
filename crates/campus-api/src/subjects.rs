//! Handlers for `/subjects` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/subjects` | |
//! | `POST`   | `/subjects` | Body: `{"name":"..."}`; returns 201 |
//! | `GET`    | `/subjects/:id` | 404 if not found |
//! | `PATCH`  | `/subjects/:id` | Body: `{"name":"...","students":[...]?}` |
//! | `DELETE` | `/subjects/:id` | Returns the removed record |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use campus_core::{
  Campus,
  schema::{NewSubject, Student, Subject, SubjectPatch},
  store::Backend,
};
use serde::Deserialize;

use crate::error::ApiError;

/// `GET /subjects`
pub async fn list<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
) -> Result<Json<Vec<Subject>>, ApiError> {
  Ok(Json(campus.subjects.list().await?))
}

/// `GET /subjects/:id`
pub async fn get_one<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
  Path(id): Path<String>,
) -> Result<Json<Subject>, ApiError> {
  Ok(Json(campus.subjects.get(&id).await?))
}

/// `POST /subjects`
pub async fn create<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
  Json(body): Json<NewSubject>,
) -> Result<impl IntoResponse, ApiError> {
  let subject = campus.subjects.create(body).await?;
  Ok((StatusCode::CREATED, Json(subject)))
}

#[derive(Debug, Deserialize)]
pub struct UpdateBody {
  pub name:     String,
  /// Replaces the whole roster when present.
  pub students: Option<Vec<Student>>,
}

/// `PATCH /subjects/:id`
pub async fn update<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
  Path(id): Path<String>,
  Json(body): Json<UpdateBody>,
) -> Result<Json<Subject>, ApiError> {
  let patch = SubjectPatch { name: Some(body.name), students: body.students };
  Ok(Json(campus.subjects.update(&id, patch).await?))
}

/// `DELETE /subjects/:id`
pub async fn delete<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
  Path(id): Path<String>,
) -> Result<Json<Subject>, ApiError> {
  Ok(Json(campus.subjects.delete(&id).await?))
}
