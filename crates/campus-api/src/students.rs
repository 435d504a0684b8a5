//! Handlers for `/students` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/students` | All students in key order |
//! | `POST`   | `/students` | Body: `{"name":"...","password":"..."}`; returns 201 |
//! | `GET`    | `/students/:id` | 404 if not found |
//! | `PATCH`  | `/students/:id` | Body: any subset of `name`, `password`, `subjects` |
//! | `DELETE` | `/students/:id` | Returns the removed record |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use campus_core::{
  Campus,
  schema::{NewStudent, Student, StudentPatch},
  store::Backend,
};

use crate::error::ApiError;

/// `GET /students`
pub async fn list<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
) -> Result<Json<Vec<Student>>, ApiError> {
  Ok(Json(campus.students.list().await?))
}

/// `GET /students/:id`
pub async fn get_one<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
  Path(id): Path<String>,
) -> Result<Json<Student>, ApiError> {
  Ok(Json(campus.students.get(&id).await?))
}

/// `POST /students`
pub async fn create<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
  Json(body): Json<NewStudent>,
) -> Result<impl IntoResponse, ApiError> {
  let student = campus.students.create(body).await?;
  Ok((StatusCode::CREATED, Json(student)))
}

/// `PATCH /students/:id` — omitted fields keep their stored value.
pub async fn update<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
  Path(id): Path<String>,
  Json(patch): Json<StudentPatch>,
) -> Result<Json<Student>, ApiError> {
  Ok(Json(campus.students.update(&id, patch).await?))
}

/// `DELETE /students/:id`
pub async fn delete<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
  Path(id): Path<String>,
) -> Result<Json<Student>, ApiError> {
  Ok(Json(campus.students.delete(&id).await?))
}
