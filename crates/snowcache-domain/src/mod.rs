//! # Snowcache Domain
//!
//! Core types shared by every layer of the entity cache:
//!
//! - [`value_objects`] - the [`Snowflake`] identifier used as cache key
//! - [`entities`] - the [`Entity`] capability and concrete entities such as [`User`]
//! - [`ports`] - contracts a backing store and an identity extractor must satisfy
//! - [`error`] - the domain [`Error`] and [`Result`] alias
//!
//! The domain crate has no knowledge of locking primitives or wire parsing
//! strategies; those live in `snowcache-providers`.

/// Domain constants
pub mod constants;
/// Cached entity types
pub mod entities;
/// Error handling types
pub mod error;
/// Port interfaces implemented by providers
pub mod ports;
/// Value objects
pub mod value_objects;

pub use entities::{Entity, User};
pub use error::{Error, Result};
pub use ports::{
    CacheItem, CacheReader, CacheStats, CacheStore, CacheWriter, IdentityExtractor,
};
pub use value_objects::Snowflake;
