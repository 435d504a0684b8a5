//! Contracts for the capabilities a repository is built on: the ordered map
//! that holds a collection, the backend that hands those maps out, the clock
//! and the id generator.
//!
//! Storage backends (e.g. `campus-store-sqlite`, [`crate::memory`]) implement
//! [`Backend`] and [`OrderedMap`]. Higher layers depend on these abstractions,
//! not on any concrete backend.

use std::{
  future::Future,
  sync::atomic::{AtomicU64, Ordering},
};

use chrono::Utc;
use uuid::Uuid;

use crate::entity::{Entity, Timestamp};

// ─── Ordered map ─────────────────────────────────────────────────────────────

/// A durable map from identifier to record, iterated in key order.
///
/// Every method touches a single key (or reads the whole collection); the
/// map offers no multi-key transactions.
pub trait OrderedMap<V>: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Store `value` under `key`, returning the value it replaced.
  fn insert(
    &self,
    key: String,
    value: V,
  ) -> impl Future<Output = Result<Option<V>, Self::Error>> + Send + '_;

  fn get<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Option<V>, Self::Error>> + Send + 'a;

  /// Remove `key`, returning the value that was stored under it.
  fn remove<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Option<V>, Self::Error>> + Send + 'a;

  /// All stored values in the map's native (key) order.
  fn values(
    &self,
  ) -> impl Future<Output = Result<Vec<V>, Self::Error>> + Send + '_;
}

// ─── Backend ─────────────────────────────────────────────────────────────────

/// Provides one [`OrderedMap`] per entity collection.
///
/// Maps handed out for the same [`Entity::COLLECTION`] share their contents.
pub trait Backend: Send + Sync {
  type Map<E: Entity>: OrderedMap<E>;

  fn collection<E: Entity>(&self) -> Self::Map<E>;
}

// ─── Clock ───────────────────────────────────────────────────────────────────

pub trait Clock: Send + Sync {
  /// A reading that is never smaller than any earlier reading.
  fn now(&self) -> Timestamp;
}

/// Nanoseconds since the Unix epoch, clamped so that a wall-clock step
/// backwards never produces a smaller reading.
#[derive(Debug, Default)]
pub struct SystemClock {
  last: AtomicU64,
}

impl Clock for SystemClock {
  fn now(&self) -> Timestamp {
    let wall = Utc::now()
      .timestamp_nanos_opt()
      .and_then(|n| u64::try_from(n).ok())
      .unwrap_or(0);
    let prev = self.last.fetch_max(wall, Ordering::AcqRel);
    Timestamp(prev.max(wall))
  }
}

// ─── Identifiers ─────────────────────────────────────────────────────────────

pub trait IdGenerator: Send + Sync {
  /// A globally unique, opaque identifier.
  fn generate(&self) -> String;
}

/// Random (v4) UUIDs in hyphenated lowercase form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
  fn generate(&self) -> String { Uuid::new_v4().hyphenated().to_string() }
}
