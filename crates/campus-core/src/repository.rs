//! [`Repository`] — CRUD and timestamp/merge discipline for one entity type
//! over one [`OrderedMap`].

use std::{marker::PhantomData, sync::Arc};

use tokio::sync::Mutex;

use crate::{
  entity::{Entity, Meta},
  store::{Clock, IdGenerator, OrderedMap},
  Error, Result,
};

/// How many ids to draw before giving up on finding a free one.
const MAX_ID_ATTEMPTS: usize = 8;

/// A typed collection of `E` records backed by the map `M`.
///
/// Writes (create, update, delete) are serialised, so the read-modify-write
/// of an update is never interleaved with another write to the same
/// collection. Reads take no lock.
pub struct Repository<E, M> {
  map:     M,
  clock:   Arc<dyn Clock>,
  ids:     Arc<dyn IdGenerator>,
  writes:  Mutex<()>,
  _entity: PhantomData<fn() -> E>,
}

impl<E, M> Repository<E, M>
where
  E: Entity,
  M: OrderedMap<E>,
{
  pub fn new(map: M, clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
    Self {
      map,
      clock,
      ids,
      writes: Mutex::new(()),
      _entity: PhantomData,
    }
  }

  /// Every stored record, in the map's iteration order.
  pub async fn list(&self) -> Result<Vec<E>> {
    self.map.values().await.map_err(Error::store)
  }

  pub async fn get(&self, id: &str) -> Result<E> {
    self
      .map
      .get(id)
      .await
      .map_err(Error::store)?
      .ok_or_else(|| Error::NotFound { entity: E::NAME, id: id.to_owned() })
  }

  /// Persist a new record with a fresh id and `created_at = now`.
  pub async fn create(&self, new: E::New) -> Result<E> {
    let _guard = self.writes.lock().await;

    let id = self.fresh_id().await?;
    let record = E::create(Meta::fresh(id.clone(), self.clock.now()), new);
    self.map.insert(id, record.clone()).await.map_err(Error::store)?;

    tracing::debug!(entity = E::NAME, id = record.id(), "created");
    Ok(record)
  }

  /// Merge `patch` over the stored record and stamp `updated_at`.
  pub async fn update(&self, id: &str, patch: E::Patch) -> Result<E> {
    let _guard = self.writes.lock().await;

    let Some(mut record) = self.map.get(id).await.map_err(Error::store)? else {
      tracing::debug!(entity = E::NAME, id, "update of missing record");
      return Err(Error::UpdateFailed { entity: E::NAME, id: id.to_owned() });
    };

    record.merge(patch);
    record.meta_mut().touch(self.clock.now());
    self
      .map
      .insert(id.to_owned(), record.clone())
      .await
      .map_err(Error::store)?;

    tracing::debug!(
      entity = E::NAME,
      id,
      at = %record.meta().last_written(),
      "updated"
    );
    Ok(record)
  }

  /// Remove the record and hand back its last state.
  pub async fn delete(&self, id: &str) -> Result<E> {
    let _guard = self.writes.lock().await;

    match self.map.remove(id).await.map_err(Error::store)? {
      Some(record) => {
        tracing::debug!(entity = E::NAME, id, "deleted");
        Ok(record)
      }
      None => {
        tracing::debug!(entity = E::NAME, id, "delete of missing record");
        Err(Error::DeleteFailed { entity: E::NAME, id: id.to_owned() })
      }
    }
  }

  /// Draw ids until one is not already present in the map.
  ///
  /// Must be called with the write lock held.
  async fn fresh_id(&self) -> Result<String> {
    for _ in 0..MAX_ID_ATTEMPTS {
      let id = self.ids.generate();
      if self.map.get(&id).await.map_err(Error::store)?.is_none() {
        return Ok(id);
      }
      tracing::warn!(entity = E::NAME, id = %id, "generated id already in use");
    }
    Err(Error::IdCollision { entity: E::NAME })
  }
}
