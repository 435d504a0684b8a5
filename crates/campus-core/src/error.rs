//! Error types for `campus-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("no {entity} found: {id}")]
  NotFound { entity: &'static str, id: String },

  #[error("update failed: no {entity} with id {id}")]
  UpdateFailed { entity: &'static str, id: String },

  #[error("delete failed: no {entity} with id {id}")]
  DeleteFailed { entity: &'static str, id: String },

  /// The id generator kept producing identifiers that were already taken.
  #[error("could not allocate a fresh {entity} id")]
  IdCollision { entity: &'static str },

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Stable, machine-readable tag for the failure kind.
  pub fn kind(&self) -> &'static str {
    match self {
      Self::NotFound { .. } => "not_found",
      Self::UpdateFailed { .. } => "update_failed",
      Self::DeleteFailed { .. } => "delete_failed",
      Self::IdCollision { .. } => "id_collision",
      Self::Store(_) => "store",
    }
  }

  pub(crate) fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
