//! Entity Cache Use Case
//!
//! Binds one [`CacheStore`] to one [`Entity`] type and exposes thread-safe
//! CRUD plus the two ingestion routes.
//!
//! ## Locking
//!
//! | Operation | Lock |
//! |-----------|------|
//! | `get`, `with_entity`, `size`, `cap`, `list_ids`, `stats` | shared |
//! | `handle_stream_update`, `handle_snapshot_response`, `touch`, `delete` | exclusive |
//! | `for_each` | shared, once for the id list and once per entry |
//!
//! Locks are held only for map operations and a bounded decode, never across
//! a caller-supplied callback.

use crate::ports::handlers::{AnySnapshotHandler, SnapshotHandler, StreamUpdateHandler};
use snowcache_domain::entities::Entity;
use snowcache_domain::error::{Error, Result};
use snowcache_domain::ports::{CacheReader, CacheStats, CacheStore, CacheWriter, IdentityExtractor};
use snowcache_domain::value_objects::Snowflake;
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Generic adapter between a cache store and an entity type
pub struct EntityCache<T, S, X> {
    store: S,
    extractor: X,
    hits: AtomicU64,
    misses: AtomicU64,
    _entity: PhantomData<fn() -> T>,
}

impl<T, S, X> EntityCache<T, S, X>
where
    T: Entity,
    S: CacheStore<T>,
    X: IdentityExtractor,
{
    /// Create a cache over `store`, resolving raw identifiers with `extractor`
    pub fn new(store: S, extractor: X) -> Self {
        Self {
            store,
            extractor,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            _entity: PhantomData,
        }
    }

    /// Merge a raw, possibly partial, update into the cache
    ///
    /// An existing entry is updated field by field in place; fields absent
    /// from `raw` keep their values. Otherwise a new entry is decoded and
    /// inserted. Nothing is inserted unless decoding succeeds.
    pub fn handle_stream_update(&self, raw: &[u8]) -> Result<()> {
        let id = self.extractor.extract_id(raw)?;

        let mut entries = self.store.write();
        if let Some(item) = entries.get_mut(id) {
            item.payload_mut().merge_from_slice(raw)?;
            debug!(kind = T::KIND, id = %id, "Merged stream update into cached entity");
            return Ok(());
        }

        let entity = T::decode(raw)?;
        entries.set(id, self.store.create_item(entity));
        debug!(kind = T::KIND, id = %id, "Cached entity from stream update");
        Ok(())
    }

    /// Store a fully populated entity from a point-in-time response
    ///
    /// An existing entry keeps its cache item (usage score and insertion
    /// order) and has every payload field overwritten. `None` is a no-op.
    pub fn handle_snapshot_response(&self, entity: Option<T>) -> Result<()> {
        let Some(entity) = entity else {
            return Ok(());
        };

        let id = entity.id();
        if id.is_empty() {
            return Err(Error::identity_not_found(format!(
                "{} snapshot has a zero identifier",
                T::KIND
            )));
        }

        let mut entries = self.store.write();
        if let Some(item) = entries.get_mut(id) {
            entity.copy_over_to(item.payload_mut());
            debug!(kind = T::KIND, id = %id, "Overwrote cached entity from snapshot");
        } else {
            entries.set(id, self.store.create_item(entity));
            debug!(kind = T::KIND, id = %id, "Cached entity from snapshot");
        }
        Ok(())
    }

    /// Copy of the cached entity, if resident
    pub fn get(&self, id: Snowflake) -> Option<T> {
        let entity = self.fetch(id);
        let counter = if entity.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        entity
    }

    /// Run `f` against the cached entity under the shared lock, without cloning
    pub fn with_entity<R>(&self, id: Snowflake, f: impl FnOnce(&T) -> R) -> Option<R> {
        let entries = self.store.read();
        entries.get(id).map(|item| f(item.payload()))
    }

    /// Boost the usage score of a resident entry; returns false when absent
    pub fn touch(&self, id: Snowflake, delta: u64) -> bool {
        let mut entries = self.store.write();
        match entries.get_mut(id) {
            Some(item) => {
                item.touch(delta);
                true
            }
            None => false,
        }
    }

    /// Remove an entry; returns false when it was not resident
    pub fn delete(&self, id: Snowflake) -> bool {
        self.store.write().delete(id).is_some()
    }

    /// Number of resident entries
    pub fn size(&self) -> usize {
        self.store.read().size()
    }

    /// Maximum number of resident entries
    pub fn cap(&self) -> usize {
        self.store.read().cap()
    }

    /// Identifiers of all resident entries
    pub fn list_ids(&self) -> Vec<Snowflake> {
        self.store.read().list_ids()
    }

    /// Visit every entity resident when the call starts
    ///
    /// The id list is snapshotted first; each entity is then fetched under its
    /// own short shared lock and handed to `f` after the lock is released.
    /// Entries removed in between are skipped, and mutations made in between
    /// are visible.
    pub fn for_each(&self, mut f: impl FnMut(T)) {
        for id in self.list_ids() {
            if let Some(entity) = self.fetch(id) {
                f(entity);
            }
        }
    }

    /// Snapshot of hit/miss counters and store occupancy
    pub fn stats(&self) -> CacheStats {
        let entries = self.store.read();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: entries.size(),
            capacity: entries.cap(),
            evictions: entries.evictions(),
        }
    }

    fn fetch(&self, id: Snowflake) -> Option<T> {
        let entries = self.store.read();
        entries.get(id).map(|item| item.payload().clone())
    }
}

impl<T, S, X> StreamUpdateHandler for EntityCache<T, S, X>
where
    T: Entity,
    S: CacheStore<T>,
    X: IdentityExtractor,
{
    fn handle_stream_update(&self, raw: &[u8]) -> Result<()> {
        EntityCache::handle_stream_update(self, raw)
    }
}

impl<T, S, X> SnapshotHandler<T> for EntityCache<T, S, X>
where
    T: Entity,
    S: CacheStore<T>,
    X: IdentityExtractor,
{
    fn handle_snapshot_response(&self, entity: Option<T>) -> Result<()> {
        EntityCache::handle_snapshot_response(self, entity)
    }
}

impl<T, S, X> AnySnapshotHandler for EntityCache<T, S, X>
where
    T: Entity,
    S: CacheStore<T>,
    X: IdentityExtractor,
{
    fn entity_kind(&self) -> &'static str {
        T::KIND
    }

    fn handle_any_snapshot(&self, entity: Box<dyn Any + Send>) -> Result<()> {
        match entity.downcast::<T>() {
            Ok(entity) => self.handle_snapshot_response(Some(*entity)),
            Err(_) => Err(Error::type_mismatch(T::KIND, "a different entity type")),
        }
    }
}

impl<T, S, X> fmt::Debug for EntityCache<T, S, X>
where
    T: Entity,
    S: CacheStore<T>,
    X: IdentityExtractor,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.store.read();
        f.debug_struct("EntityCache")
            .field("kind", &T::KIND)
            .field("size", &entries.size())
            .field("cap", &entries.cap())
            .finish()
    }
}
