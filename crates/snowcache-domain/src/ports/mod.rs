//! Domain Port Interfaces
//!
//! Contracts implemented by `snowcache-providers` and consumed by the
//! application layer. High-level code depends on these traits only; the
//! concrete store and extractor are chosen by infrastructure wiring.

/// External provider ports
pub mod providers;

pub use providers::{
    CacheItem, CacheReader, CacheStats, CacheStore, CacheWriter, IdentityExtractor,
};
