//! Handlers for `/teachers` endpoints. Teachers are read/create only.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use campus_core::{
  Campus,
  schema::{NewTeacher, Teacher},
  store::Backend,
};

use crate::error::ApiError;

/// `GET /teachers`
pub async fn list<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
) -> Result<Json<Vec<Teacher>>, ApiError> {
  Ok(Json(campus.teachers.list().await?))
}

/// `GET /teachers/:id`
pub async fn get_one<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
  Path(id): Path<String>,
) -> Result<Json<Teacher>, ApiError> {
  Ok(Json(campus.teachers.get(&id).await?))
}

/// `POST /teachers` — body: `{"name":"...","password":"..."}`
pub async fn create<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
  Json(body): Json<NewTeacher>,
) -> Result<impl IntoResponse, ApiError> {
  let teacher = campus.teachers.create(body).await?;
  Ok((StatusCode::CREATED, Json(teacher)))
}
