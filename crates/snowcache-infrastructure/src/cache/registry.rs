//! Entity cache registry
//!
//! Wires the application-layer [`EntityCache`] to the concrete
//! [`CacheList`] store and [`JsonIdentityExtractor`]. One cache per entity
//! type is created at start-up and lives as long as the registry; there is
//! no reset operation.

use crate::config::{CacheConfig, EntityCacheConfig};
use snowcache_application::ports::{AnySnapshotHandler, SnapshotHandler, StreamUpdateHandler};
use snowcache_application::use_cases::EntityCache;
use snowcache_domain::entities::{Entity, User};
use snowcache_domain::error::Result;
use snowcache_domain::ports::CacheStats;
use snowcache_providers::cache::CacheList;
use snowcache_providers::identity::JsonIdentityExtractor;
use std::collections::BTreeMap;
use tracing::info;

/// Entity cache backed by a [`CacheList`] and JSON identity extraction
pub type ListEntityCache<T> = EntityCache<T, CacheList<T>, JsonIdentityExtractor>;

/// User cache
pub type UserCache = ListEntityCache<User>;

// Compile-time check that the concrete caches implement every ingestion port
const _: fn() = || {
    fn assert_handlers<T, H>()
    where
        H: StreamUpdateHandler + SnapshotHandler<T> + AnySnapshotHandler,
    {
    }
    assert_handlers::<User, UserCache>();
};

/// Build a list-backed cache for any entity type
pub fn create_entity_cache<T: Entity>(config: &EntityCacheConfig) -> Result<ListEntityCache<T>> {
    let store = CacheList::new(config.capacity)?;
    info!(kind = T::KIND, capacity = config.capacity, "Created entity cache");
    Ok(EntityCache::new(store, JsonIdentityExtractor::new()))
}

/// All entity caches of a client process
#[derive(Debug)]
pub struct EntityCaches {
    users: UserCache,
}

impl EntityCaches {
    /// Create every cache from configuration
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Ok(Self {
            users: create_entity_cache(&config.users)?,
        })
    }

    /// User cache
    pub fn users(&self) -> &UserCache {
        &self.users
    }

    /// Snapshot handler for an entity kind, for routing type-erased responses
    pub fn snapshot_handler(&self, kind: &str) -> Option<&dyn AnySnapshotHandler> {
        let handlers: [&dyn AnySnapshotHandler; 1] = [&self.users];
        handlers
            .into_iter()
            .find(|handler| handler.entity_kind() == kind)
    }

    /// Statistics of every cache keyed by entity kind
    pub fn stats(&self) -> BTreeMap<&'static str, CacheStats> {
        BTreeMap::from([(User::KIND, self.users.stats())])
    }
}
