//! JSON REST API for Campus.
//!
//! Exposes an axum [`Router`] backed by a [`Campus`] over any
//! [`Backend`]. Transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", campus_api::api_router(campus.clone()))
//! ```

pub mod assignments;
pub mod classes;
pub mod error;
pub mod students;
pub mod subjects;
pub mod submissions;
pub mod teachers;

use std::sync::Arc;

use axum::{Router, routing::get};
use campus_core::{Campus, store::Backend};

pub use error::ApiError;

/// Build a fully-materialised API router for `campus`.
///
/// Teachers and classes are read/create only; the other four collections
/// expose the full CRUD surface.
pub fn api_router<B>(campus: Arc<Campus<B>>) -> Router<()>
where
  B: Backend + 'static,
{
  Router::new()
    // Students
    .route("/students", get(students::list::<B>).post(students::create::<B>))
    .route(
      "/students/{id}",
      get(students::get_one::<B>)
        .patch(students::update::<B>)
        .delete(students::delete::<B>),
    )
    // Subjects
    .route("/subjects", get(subjects::list::<B>).post(subjects::create::<B>))
    .route(
      "/subjects/{id}",
      get(subjects::get_one::<B>)
        .patch(subjects::update::<B>)
        .delete(subjects::delete::<B>),
    )
    // Assignments
    .route(
      "/assignments",
      get(assignments::list::<B>).post(assignments::create::<B>),
    )
    .route(
      "/assignments/{id}",
      get(assignments::get_one::<B>)
        .put(assignments::update::<B>)
        .delete(assignments::delete::<B>),
    )
    // Submissions
    .route(
      "/submissions",
      get(submissions::list::<B>).post(submissions::create::<B>),
    )
    .route(
      "/submissions/{id}",
      get(submissions::get_one::<B>)
        .put(submissions::update::<B>)
        .delete(submissions::delete::<B>),
    )
    // Teachers
    .route("/teachers", get(teachers::list::<B>).post(teachers::create::<B>))
    .route("/teachers/{id}", get(teachers::get_one::<B>))
    // Classes
    .route("/classes", get(classes::list::<B>).post(classes::create::<B>))
    .route("/classes/{id}", get(classes::get_one::<B>))
    .with_state(campus)
}

#[cfg(test)]
mod tests;
