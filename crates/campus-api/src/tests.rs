//! Router tests over the in-memory backend.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode},
};
use campus_core::{
  Campus, MemoryStore,
  store::{IdGenerator, SystemClock},
};
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::api_router;

fn app() -> Router {
  api_router(Arc::new(Campus::new(&MemoryStore::new())))
}

/// Hands out the same id every time.
struct FixedIds;

impl IdGenerator for FixedIds {
  fn generate(&self) -> String { "same".into() }
}

async fn send(
  app: &Router,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> (StatusCode, Value) {
  let mut req = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(v) => {
      req = req.header("content-type", "application/json");
      Body::from(v.to_string())
    }
    None => Body::empty(),
  };

  let res = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
  let status = res.status();
  let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
    .await
    .unwrap();
  let value = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
  };
  (status, value)
}

#[tokio::test]
async fn student_crud_over_http() {
  let app = app();

  let (status, ada) = send(
    &app,
    "POST",
    "/students",
    Some(json!({ "name": "Ada", "password": "pw1" })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(ada["name"], "Ada");
  assert_eq!(ada["subjects"], json!([]));
  assert!(ada["updated_at"].is_null());
  let id = ada["id"].as_str().unwrap().to_owned();

  let (status, fetched) = send(&app, "GET", &format!("/students/{id}"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(fetched, ada);

  let (status, updated) = send(
    &app,
    "PATCH",
    &format!("/students/{id}"),
    Some(json!({ "name": "Ada L." })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(updated["name"], "Ada L.");
  assert_eq!(updated["password"], "pw1");
  assert!(updated["updated_at"].as_u64().is_some());

  let (status, all) = send(&app, "GET", "/students", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(all.as_array().map(Vec::len), Some(1));

  let (status, deleted) = send(&app, "DELETE", &format!("/students/{id}"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(deleted, updated);

  let (status, body) = send(&app, "GET", &format!("/students/{id}"), None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["kind"], "not_found");
}

#[tokio::test]
async fn missing_ids_map_to_failure_kinds() {
  let app = app();

  let (status, body) = send(
    &app,
    "PATCH",
    "/subjects/ghost",
    Some(json!({ "name": "Math" })),
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["kind"], "update_failed");
  assert!(body["error"].as_str().unwrap().contains("ghost"));

  let (status, body) = send(&app, "DELETE", "/assignments/ghost", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["kind"], "delete_failed");
}

#[tokio::test]
async fn submission_requires_both_snapshots() {
  let app = app();

  let (_, ada) = send(
    &app,
    "POST",
    "/students",
    Some(json!({ "name": "Ada", "password": "pw1" })),
  )
  .await;
  let (_, math) = send(&app, "POST", "/subjects", Some(json!({ "name": "Math" }))).await;
  let (status, hw) = send(
    &app,
    "POST",
    "/assignments",
    Some(json!({ "name": "HW1", "subject": &math, "task": ["p1"] })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(hw["iscompleted"], false);
  assert_eq!(hw["issubmitted"], false);

  let (status, _) = send(
    &app,
    "POST",
    "/submissions",
    Some(json!({ "student": &ada, "task": ["done"] })),
  )
  .await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
  let (_, all) = send(&app, "GET", "/submissions", None).await;
  assert_eq!(all, json!([]));

  let (status, sub) = send(
    &app,
    "POST",
    "/submissions",
    Some(json!({ "student": &ada, "assignment": &hw, "task": ["done"] })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(sub["issubmitted"], true);
  assert_eq!(sub["assignment"]["subject"]["name"], "Math");
}

#[tokio::test]
async fn assignment_snapshot_outlives_subject_rename() {
  let app = app();

  let (_, math) = send(&app, "POST", "/subjects", Some(json!({ "name": "Math" }))).await;
  let subject_id = math["id"].as_str().unwrap().to_owned();
  let (_, hw) = send(
    &app,
    "POST",
    "/assignments",
    Some(json!({ "name": "HW1", "subject": &math, "task": ["p1"] })),
  )
  .await;
  let hw_id = hw["id"].as_str().unwrap().to_owned();

  let (status, renamed) = send(
    &app,
    "PATCH",
    &format!("/subjects/{subject_id}"),
    Some(json!({ "name": "Algebra" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(renamed["name"], "Algebra");

  let (_, refetched) = send(&app, "GET", &format!("/assignments/{hw_id}"), None).await;
  assert_eq!(refetched["subject"]["name"], "Math");

  let (status, updated) = send(
    &app,
    "PUT",
    &format!("/assignments/{hw_id}"),
    Some(json!({ "name": "HW1", "subject": &renamed, "task": ["p1", "p2"] })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(updated["subject"]["name"], "Algebra");
  assert_eq!(updated["task"], json!(["p1", "p2"]));
}

#[tokio::test]
async fn teachers_and_classes_are_read_create_only() {
  let app = app();

  let (status, grace) = send(
    &app,
    "POST",
    "/teachers",
    Some(json!({ "name": "Grace", "password": "pw" })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);

  let (status, class) = send(
    &app,
    "POST",
    "/classes",
    Some(json!({ "name": "1A", "teacher": &grace })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(class["students"], json!([]));
  assert_eq!(class["teacher"]["name"], "Grace");

  let class_id = class["id"].as_str().unwrap();
  let (status, _) = send(&app, "DELETE", &format!("/classes/{class_id}"), None).await;
  assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

  let (status, fetched) = send(&app, "GET", &format!("/classes/{class_id}"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(fetched, class);
}

#[tokio::test]
async fn exhausted_ids_map_to_server_error() {
  let campus = Campus::with_parts(
    &MemoryStore::new(),
    Arc::new(SystemClock::default()),
    Arc::new(FixedIds),
  );
  let app = api_router(Arc::new(campus));

  let (status, _) = send(&app, "POST", "/subjects", Some(json!({ "name": "Math" }))).await;
  assert_eq!(status, StatusCode::CREATED);

  let (status, body) = send(&app, "POST", "/subjects", Some(json!({ "name": "Art" }))).await;
  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(body["kind"], "id_collision");
  assert!(body["error"].is_string());

  let (_, all) = send(&app, "GET", "/subjects", None).await;
  assert_eq!(all.as_array().map(Vec::len), Some(1));
  assert_eq!(all[0]["name"], "Math");
}

#[tokio::test]
async fn subject_roster_is_filled_by_patch() {
  let app = app();

  let (_, ada) = send(
    &app,
    "POST",
    "/students",
    Some(json!({ "name": "Ada", "password": "pw1" })),
  )
  .await;
  let (_, math) = send(&app, "POST", "/subjects", Some(json!({ "name": "Math" }))).await;
  assert_eq!(math["students"], json!([]));
  let id = math["id"].as_str().unwrap().to_owned();

  let (status, updated) = send(
    &app,
    "PATCH",
    &format!("/subjects/{id}"),
    Some(json!({ "name": "Math", "students": [&ada] })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(updated["students"], json!([&ada]));
  assert!(updated["updated_at"].as_u64().is_some());

  let (_, fetched) = send(&app, "GET", &format!("/subjects/{id}"), None).await;
  assert_eq!(fetched, updated);

  let (status, renamed) = send(
    &app,
    "PATCH",
    &format!("/subjects/{id}"),
    Some(json!({ "name": "Algebra" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(renamed["students"][0]["name"], "Ada");
}
