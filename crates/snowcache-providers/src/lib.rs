//! # Snowcache - Provider Implementations
//!
//! Concrete implementations of the ports defined in `snowcache-domain`.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Cache store | `CacheStore` | [`CacheList`](cache::CacheList) |
//! | Identity | `IdentityExtractor` | [`JsonIdentityExtractor`](identity::JsonIdentityExtractor) |
//!
//! ## Usage
//!
//! ```ignore
//! use snowcache_providers::cache::CacheList;
//! use snowcache_providers::identity::JsonIdentityExtractor;
//! ```

// Re-export domain types commonly used with providers
pub use snowcache_domain::error::{Error, Result};
pub use snowcache_domain::ports::{CacheStore, IdentityExtractor};

/// Cache store implementations
///
/// Implements `CacheStore` for capacity-bounded in-memory storage.
pub mod cache;

/// Identity extractor implementations
///
/// Implements `IdentityExtractor` for JSON payloads.
pub mod identity;

pub use cache::CacheList;
pub use identity::JsonIdentityExtractor;
