//! Handlers for `/classes` endpoints. Classes are read/create only.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use campus_core::{
  Campus,
  schema::{Class, NewClass},
  store::Backend,
};

use crate::error::ApiError;

/// `GET /classes`
pub async fn list<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
) -> Result<Json<Vec<Class>>, ApiError> {
  Ok(Json(campus.classes.list().await?))
}

/// `GET /classes/:id`
pub async fn get_one<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
  Path(id): Path<String>,
) -> Result<Json<Class>, ApiError> {
  Ok(Json(campus.classes.get(&id).await?))
}

/// `POST /classes` — body: `{"name":"...","teacher":{...}}`; the roster
/// starts empty.
pub async fn create<B: Backend>(
  State(campus): State<Arc<Campus<B>>>,
  Json(body): Json<NewClass>,
) -> Result<impl IntoResponse, ApiError> {
  let class = campus.classes.create(body).await?;
  Ok((StatusCode::CREATED, Json(class)))
}
