//! [`MemoryStore`] — a process-local [`Backend`].
//!
//! Records are kept serialised, exactly as a durable backend would hold them,
//! so handing out a record never shares state with the stored copy.

use std::{
  collections::{BTreeMap, HashMap},
  marker::PhantomData,
  sync::{Arc, Mutex, PoisonError},
};

use crate::{
  entity::Entity,
  store::{Backend, OrderedMap},
};

type Table = Arc<Mutex<BTreeMap<String, String>>>;

/// An in-memory backend; every collection is a `BTreeMap` of JSON records.
///
/// Cloning is cheap and clones share their contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  tables: Arc<Mutex<HashMap<&'static str, Table>>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }
}

impl Backend for MemoryStore {
  type Map<E: Entity> = MemoryMap<E>;

  fn collection<E: Entity>(&self) -> MemoryMap<E> {
    let mut tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
    let table = tables.entry(E::COLLECTION).or_default().clone();
    MemoryMap { table, _entity: PhantomData }
  }
}

/// One collection of a [`MemoryStore`].
#[derive(Debug)]
pub struct MemoryMap<E> {
  table:   Table,
  _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for MemoryMap<E> {
  fn clone(&self) -> Self {
    Self { table: self.table.clone(), _entity: PhantomData }
  }
}

impl<E> MemoryMap<E> {
  fn with<R>(&self, f: impl FnOnce(&mut BTreeMap<String, String>) -> R) -> R {
    let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut *table)
  }
}

fn decode<E: Entity>(raw: Option<String>) -> serde_json::Result<Option<E>> {
  raw.map(|s| serde_json::from_str(&s)).transpose()
}

impl<E: Entity> OrderedMap<E> for MemoryMap<E> {
  type Error = serde_json::Error;

  async fn insert(&self, key: String, value: E) -> serde_json::Result<Option<E>> {
    let encoded = serde_json::to_string(&value)?;
    decode(self.with(|t| t.insert(key, encoded)))
  }

  async fn get(&self, key: &str) -> serde_json::Result<Option<E>> {
    decode(self.with(|t| t.get(key).cloned()))
  }

  async fn remove(&self, key: &str) -> serde_json::Result<Option<E>> {
    decode(self.with(|t| t.remove(key)))
  }

  async fn values(&self) -> serde_json::Result<Vec<E>> {
    let raws: Vec<String> = self.with(|t| t.values().cloned().collect());
    raws.iter().map(|s| serde_json::from_str(s)).collect()
  }
}
