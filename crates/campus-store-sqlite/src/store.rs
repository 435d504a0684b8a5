//! [`SqliteStore`] — the SQLite implementation of [`Backend`].

use std::{marker::PhantomData, path::Path};

use campus_core::{
  Entity,
  store::{Backend, OrderedMap},
};
use rusqlite::OptionalExtension as _;

use crate::{
  encode::{decode_record, encode_record},
  schema::schema,
  Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Campus backend backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    let ddl = schema();
    self
      .conn
      .call(move |conn| {
        conn.execute_batch(&ddl)?;
        Ok(())
      })
      .await?;
    tracing::debug!("sqlite schema ready");
    Ok(())
  }
}

impl Backend for SqliteStore {
  type Map<E: Entity> = SqliteMap<E>;

  fn collection<E: Entity>(&self) -> SqliteMap<E> {
    SqliteMap {
      conn:    self.conn.clone(),
      table:   E::COLLECTION,
      _entity: PhantomData,
    }
  }
}

// ─── Map ─────────────────────────────────────────────────────────────────────

/// One collection table of a [`SqliteStore`].
pub struct SqliteMap<E> {
  conn:    tokio_rusqlite::Connection,
  table:   &'static str,
  _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for SqliteMap<E> {
  fn clone(&self) -> Self {
    Self {
      conn:    self.conn.clone(),
      table:   self.table,
      _entity: PhantomData,
    }
  }
}

impl<E: Entity> OrderedMap<E> for SqliteMap<E> {
  type Error = crate::Error;

  async fn insert(&self, key: String, value: E) -> Result<Option<E>> {
    let record = encode_record(&value)?;
    let select = format!("SELECT record FROM {} WHERE id = ?1", self.table);
    let upsert = format!(
      "INSERT INTO {} (id, record) VALUES (?1, ?2)
       ON CONFLICT(id) DO UPDATE SET record = excluded.record",
      self.table
    );

    let previous: Option<String> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let previous: Option<String> = tx
          .query_row(&select, rusqlite::params![key], |row| row.get(0))
          .optional()?;
        tx.execute(&upsert, rusqlite::params![key, record])?;
        tx.commit()?;
        Ok(previous)
      })
      .await?;

    previous.as_deref().map(decode_record::<E>).transpose()
  }

  async fn get(&self, key: &str) -> Result<Option<E>> {
    let key = key.to_owned();
    let select = format!("SELECT record FROM {} WHERE id = ?1", self.table);

    let raw: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&select, rusqlite::params![key], |row| row.get(0))
            .optional()?,
        )
      })
      .await?;

    raw.as_deref().map(decode_record::<E>).transpose()
  }

  async fn remove(&self, key: &str) -> Result<Option<E>> {
    let key = key.to_owned();
    let select = format!("SELECT record FROM {} WHERE id = ?1", self.table);
    let delete = format!("DELETE FROM {} WHERE id = ?1", self.table);

    let removed: Option<String> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let removed: Option<String> = tx
          .query_row(&select, rusqlite::params![key], |row| row.get(0))
          .optional()?;
        if removed.is_some() {
          tx.execute(&delete, rusqlite::params![key])?;
        }
        tx.commit()?;
        Ok(removed)
      })
      .await?;

    removed.as_deref().map(decode_record::<E>).transpose()
  }

  async fn values(&self) -> Result<Vec<E>> {
    let select = format!("SELECT record FROM {} ORDER BY id", self.table);

    let raws: Vec<String> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&select)?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await?;

    raws.iter().map(|s| decode_record::<E>(s)).collect()
  }
}
