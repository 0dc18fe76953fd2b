//! Capacity-bounded cache list
//!
//! A plain `HashMap` of [`CacheItem`]s behind a single `parking_lot::RwLock`.
//! There are no per-entry locks, so an eviction scan never has to order
//! lock acquisitions.
//!
//! ## Eviction
//!
//! When a new id is inserted into a full list, the victim is the current
//! entry with the lowest usage score, oldest insertion first among equals:
//!
//! - unboosted entries leave in FIFO order
//! - an entry boosted via [`CacheItem::touch`] outlives every unboosted peer
//! - the entry being inserted is never a candidate, so it always survives
//!   the `set` that created it
//!
//! ## Example
//!
//! ```
//! use snowcache_domain::{CacheReader, CacheStore, CacheWriter, Snowflake};
//! use snowcache_providers::cache::CacheList;
//!
//! let list = CacheList::new(2).unwrap();
//! for id in 1..=3u64 {
//!     let item = list.create_item(id);
//!     list.write().set(Snowflake::new(id), item);
//! }
//! let entries = list.read();
//! assert_eq!(entries.size(), 2);
//! assert!(entries.get(Snowflake::new(1)).is_none());
//! ```

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use snowcache_domain::error::{Error, Result};
use snowcache_domain::ports::{CacheItem, CacheReader, CacheStore, CacheWriter};
use snowcache_domain::value_objects::Snowflake;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

/// Entry map guarded by the list's lock
struct Entries<T> {
    items: HashMap<Snowflake, CacheItem<T>>,
    capacity: usize,
    evictions: u64,
}

impl<T> Entries<T> {
    fn get(&self, id: Snowflake) -> Option<&CacheItem<T>> {
        self.items.get(&id)
    }

    fn list_ids(&self) -> Vec<Snowflake> {
        self.items.keys().copied().collect()
    }

    fn set(&mut self, id: Snowflake, item: CacheItem<T>) {
        if let Some(slot) = self.items.get_mut(&id) {
            *slot = item;
            return;
        }

        if self.items.len() >= self.capacity {
            self.evict_one();
        }
        self.items.insert(id, item);
    }

    /// Remove the entry with the lowest `(usage_score, insertion_sequence)`
    fn evict_one(&mut self) {
        let victim = self
            .items
            .iter()
            .min_by_key(|(_, item)| item.eviction_rank())
            .map(|(id, _)| *id);

        if let Some(id) = victim {
            if let Some(evicted) = self.items.remove(&id) {
                self.evictions += 1;
                trace!(
                    id = %id,
                    usage_score = evicted.usage_score(),
                    insertion_sequence = evicted.insertion_sequence(),
                    "Evicted cache entry"
                );
            }
        }
    }
}

/// Capacity-bounded keyed store implementing [`CacheStore`]
pub struct CacheList<T> {
    entries: RwLock<Entries<T>>,
    capacity: usize,
    next_sequence: AtomicU64,
}

impl<T> CacheList<T> {
    /// Create an empty list holding at most `capacity` entries
    ///
    /// A zero capacity is a configuration error.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::config("Cache capacity must be greater than 0"));
        }

        Ok(Self {
            entries: RwLock::new(Entries {
                items: HashMap::with_capacity(capacity),
                capacity,
                evictions: 0,
            }),
            capacity,
            next_sequence: AtomicU64::new(0),
        })
    }

    /// Maximum number of resident entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: Send + Sync> CacheStore<T> for CacheList<T> {
    type Shared<'a>
        = CacheListReadGuard<'a, T>
    where
        Self: 'a;

    type Exclusive<'a>
        = CacheListWriteGuard<'a, T>
    where
        Self: 'a;

    fn read(&self) -> Self::Shared<'_> {
        CacheListReadGuard {
            entries: self.entries.read(),
        }
    }

    fn write(&self) -> Self::Exclusive<'_> {
        CacheListWriteGuard {
            entries: self.entries.write(),
        }
    }

    fn create_item(&self, payload: T) -> CacheItem<T> {
        let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed);
        CacheItem::new(payload, sequence)
    }
}

impl<T> fmt::Debug for CacheList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheList")
            .field("capacity", &self.capacity)
            .field("entries", &self.entries.read().items.len())
            .finish()
    }
}

/// Shared lock on a [`CacheList`]; released on drop
pub struct CacheListReadGuard<'a, T> {
    entries: RwLockReadGuard<'a, Entries<T>>,
}

impl<T> CacheReader<T> for CacheListReadGuard<'_, T> {
    fn get(&self, id: Snowflake) -> Option<&CacheItem<T>> {
        self.entries.get(id)
    }

    fn size(&self) -> usize {
        self.entries.items.len()
    }

    fn cap(&self) -> usize {
        self.entries.capacity
    }

    fn list_ids(&self) -> Vec<Snowflake> {
        self.entries.list_ids()
    }

    fn evictions(&self) -> u64 {
        self.entries.evictions
    }
}

/// Exclusive lock on a [`CacheList`]; released on drop
pub struct CacheListWriteGuard<'a, T> {
    entries: RwLockWriteGuard<'a, Entries<T>>,
}

impl<T> CacheReader<T> for CacheListWriteGuard<'_, T> {
    fn get(&self, id: Snowflake) -> Option<&CacheItem<T>> {
        self.entries.get(id)
    }

    fn size(&self) -> usize {
        self.entries.items.len()
    }

    fn cap(&self) -> usize {
        self.entries.capacity
    }

    fn list_ids(&self) -> Vec<Snowflake> {
        self.entries.list_ids()
    }

    fn evictions(&self) -> u64 {
        self.entries.evictions
    }
}

impl<T> CacheWriter<T> for CacheListWriteGuard<'_, T> {
    fn get_mut(&mut self, id: Snowflake) -> Option<&mut CacheItem<T>> {
        self.entries.items.get_mut(&id)
    }

    fn set(&mut self, id: Snowflake, item: CacheItem<T>) {
        self.entries.set(id, item);
    }

    fn delete(&mut self, id: Snowflake) -> Option<CacheItem<T>> {
        self.entries.items.remove(&id)
    }
}
