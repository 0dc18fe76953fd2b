//! Cache Store Port
//!
//! Capability contract for the capacity-bounded store behind an entity cache.
//!
//! A store does not make its map operations atomic one by one. Instead it
//! hands out two lock modes:
//!
//! | Mode | Acquire | Release | Operations |
//! |------|---------|---------|------------|
//! | shared | [`CacheStore::read`] | drop the guard | [`CacheReader`] |
//! | exclusive | [`CacheStore::write`] | drop the guard | [`CacheReader`] + [`CacheWriter`] |
//!
//! Callers bracket a whole read-modify-write sequence with one exclusive
//! guard, so merging into an existing entry never needs a second acquisition.
//!
//! ## Example
//!
//! ```ignore
//! let mut entries = store.write();
//! match entries.get_mut(id) {
//!     Some(item) => item.payload_mut().merge_from_slice(raw)?,
//!     None => entries.set(id, store.create_item(User::decode(raw)?)),
//! }
//! ```

use crate::constants::CACHE_ITEM_INITIAL_SCORE;
use crate::value_objects::Snowflake;
use serde::{Deserialize, Serialize};

/// A cached payload plus the bookkeeping the eviction policy needs
///
/// Items are ordered for eviction by `(usage_score, insertion_sequence)`:
/// lowest score first, oldest first among equal scores.
#[derive(Debug, Clone)]
pub struct CacheItem<T> {
    payload: T,
    usage_score: u64,
    insertion_sequence: u64,
}

impl<T> CacheItem<T> {
    /// Wrap a payload; `insertion_sequence` must come from the owning store
    pub fn new(payload: T, insertion_sequence: u64) -> Self {
        Self {
            payload,
            usage_score: CACHE_ITEM_INITIAL_SCORE,
            insertion_sequence,
        }
    }

    /// Read access to the wrapped entity
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Write access to the wrapped entity, only reachable under an exclusive guard
    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    /// Unwrap the payload
    pub fn into_payload(self) -> T {
        self.payload
    }

    /// Raise the usage score by `delta`. Lookups never do this implicitly.
    pub fn touch(&mut self, delta: u64) {
        self.usage_score = self.usage_score.saturating_add(delta);
    }

    /// Current usage score; higher is less eligible for eviction
    pub fn usage_score(&self) -> u64 {
        self.usage_score
    }

    /// Creation order within the owning store, used as eviction tie-breaker
    pub fn insertion_sequence(&self) -> u64 {
        self.insertion_sequence
    }

    /// Eviction ordering key: the minimum is evicted first
    pub fn eviction_rank(&self) -> (u64, u64) {
        (self.usage_score, self.insertion_sequence)
    }
}

/// Cache Operation Statistics
///
/// # Example
///
/// ```
/// use snowcache_domain::CacheStats;
///
/// let stats = CacheStats { hits: 3, misses: 1, ..CacheStats::default() };
/// assert!((stats.hit_rate() - 0.75).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Lookups that found a resident entry
    pub hits: u64,
    /// Lookups that found nothing
    pub misses: u64,
    /// Resident entries
    pub entries: usize,
    /// Maximum resident entries
    pub capacity: usize,
    /// Entries removed to make room for new ones
    pub evictions: u64,
}

impl CacheStats {
    /// Fraction of lookups that hit, 0.0 when nothing was looked up
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Operations permitted while holding the shared lock
pub trait CacheReader<T> {
    /// Look up an entry without touching its usage score
    fn get(&self, id: Snowflake) -> Option<&CacheItem<T>>;

    /// Number of resident entries
    fn size(&self) -> usize;

    /// Fixed upper bound on resident entries
    fn cap(&self) -> usize;

    /// Identifiers of all resident entries, in no particular order
    fn list_ids(&self) -> Vec<Snowflake>;

    /// Number of evictions performed over the store's lifetime
    fn evictions(&self) -> u64;
}

/// Operations permitted while holding the exclusive lock
pub trait CacheWriter<T>: CacheReader<T> {
    /// Mutable lookup for in-place merges
    fn get_mut(&mut self, id: Snowflake) -> Option<&mut CacheItem<T>>;

    /// Insert or replace the entry for `id`
    ///
    /// Replacing an existing id never evicts. Inserting a new id into a full
    /// store evicts one current entry first; the new entry is never the victim.
    fn set(&mut self, id: Snowflake, item: CacheItem<T>);

    /// Remove the entry for `id`; no-op when absent
    fn delete(&mut self, id: Snowflake) -> Option<CacheItem<T>>;
}

/// Backing store for an entity cache
///
/// Any implementation honoring the lock modes and the `set` eviction
/// contract is substitutable.
pub trait CacheStore<T>: Send + Sync {
    /// Guard type returned by [`CacheStore::read`]
    type Shared<'a>: CacheReader<T>
    where
        Self: 'a;

    /// Guard type returned by [`CacheStore::write`]
    type Exclusive<'a>: CacheWriter<T>
    where
        Self: 'a;

    /// Acquire the shared lock
    fn read(&self) -> Self::Shared<'_>;

    /// Acquire the exclusive lock
    fn write(&self) -> Self::Exclusive<'_>;

    /// Wrap a payload into an item carrying this store's next insertion sequence
    fn create_item(&self, payload: T) -> CacheItem<T>;
}
