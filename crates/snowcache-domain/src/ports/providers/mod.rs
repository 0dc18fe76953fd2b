//! Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | CacheStore | Capacity-bounded keyed store with shared/exclusive lock modes |
//! | IdentityExtractor | Identifier resolution from raw payloads |

/// Cache store port
pub mod cache;
/// Identity extractor port
pub mod identity;

pub use cache::{CacheItem, CacheReader, CacheStats, CacheStore, CacheWriter};
pub use identity::IdentityExtractor;
