//! Cache configuration types

use crate::constants::DEFAULT_USER_CACHE_CAPACITY;
use serde::{Deserialize, Serialize};

/// Per-entity cache configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCacheConfig {
    /// Maximum resident entries; must be greater than 0
    pub capacity: usize,
}

impl EntityCacheConfig {
    /// Configuration with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }
}

/// Cache configuration, one section per entity type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// User cache
    pub users: EntityCacheConfig,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            users: EntityCacheConfig::with_capacity(DEFAULT_USER_CACHE_CAPACITY),
        }
    }
}
