//! Cache Store Implementations
//!
//! ## Available Stores
//!
//! | Store | Eviction | Description |
//! |-------|----------|-------------|
//! | [`CacheList`] | lowest usage score, oldest first | Capacity-bounded map behind one reader/writer lock |

pub mod list;

pub use list::{CacheList, CacheListReadGuard, CacheListWriteGuard};

// Re-export domain types used by cache stores
pub use snowcache_domain::ports::{CacheItem, CacheReader, CacheWriter};
