//! The structural skeleton shared by every record, and the [`Entity`] trait
//! that binds a schema to a repository.

use std::fmt;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

// ─── Timestamp ───────────────────────────────────────────────────────────────

/// An opaque, monotonically non-decreasing clock reading.
///
/// Only ordering is meaningful; callers must not assume wall-clock units.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(pub u64);

impl fmt::Display for Timestamp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

// ─── Meta ────────────────────────────────────────────────────────────────────

/// Identity and timestamps, flattened into every record on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
  /// Assigned once at creation; never reused.
  pub id:         String,
  /// Set exactly once at creation.
  pub created_at: Timestamp,
  /// `None` until the first successful update.
  pub updated_at: Option<Timestamp>,
}

impl Meta {
  /// Metadata for a record that has just been created.
  pub fn fresh(id: String, created_at: Timestamp) -> Self {
    Self { id, created_at, updated_at: None }
  }

  /// Mark the record as updated at `at`.
  pub fn touch(&mut self, at: Timestamp) { self.updated_at = Some(at); }

  /// The most recent write to the record.
  pub fn last_written(&self) -> Timestamp {
    self.updated_at.unwrap_or(self.created_at)
  }
}

// ─── Entity ──────────────────────────────────────────────────────────────────

/// A typed, identifiable, persisted record kept in its own collection.
///
/// `New` carries the fields a caller must supply at creation; `Patch` carries
/// the fields an update may replace. Both exclude the [`Meta`] fields, which
/// are always owned by the repository.
pub trait Entity:
  Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
  type New: Send;
  type Patch: Send;

  /// Singular name used in messages and logs, e.g. `"student"`.
  const NAME: &'static str;

  /// Name of the backing collection, e.g. `"students"`.
  const COLLECTION: &'static str;

  /// Build a record from creation input and freshly assigned metadata.
  fn create(meta: Meta, new: Self::New) -> Self;

  /// Field-replacing merge: every field present in `patch` overwrites the
  /// stored value, everything else is kept. Relational fields are replaced
  /// wholesale, never merged element-wise.
  fn merge(&mut self, patch: Self::Patch);

  fn meta(&self) -> &Meta;

  fn meta_mut(&mut self) -> &mut Meta;

  fn id(&self) -> &str { &self.meta().id }
}
