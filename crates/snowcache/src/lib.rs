//! # Snowcache
//!
//! A capacity-bounded, concurrency-safe working set of remote entities for
//! API clients. Repeated lookups are served locally; the resident set never
//! exceeds its configured capacity.
//!
//! ## Features
//!
//! - **Bounded**: each entity cache holds at most `capacity` entries
//! - **Pinning eviction**: lowest usage score goes first, oldest first among
//!   equals; callers pin entries by boosting them with `touch`
//! - **Two ingestion routes**: partial streaming updates merge field by
//!   field, snapshot responses overwrite the cached entity in place
//! - **Reader/writer locking**: concurrent readers, exclusive writers
//!
//! ## Example
//!
//! ```
//! use snowcache::{EntityCaches, Snowflake};
//! use snowcache::infrastructure::config::CacheConfig;
//!
//! let caches = EntityCaches::from_config(&CacheConfig::default()).unwrap();
//! caches
//!     .users()
//!     .handle_stream_update(br#"{"id":"42","username":"nelly"}"#)
//!     .unwrap();
//!
//! let user = caches.users().get(Snowflake::new(42)).unwrap();
//! assert_eq!(user.username, "nelly");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - entities, identifiers, store ports and errors
//! - `application` - the generic entity cache adapter and ingestion ports
//! - `providers` - the cache list store and JSON identity extraction
//! - `infrastructure` - configuration, logging and cache wiring

use std::path::Path;

/// Domain layer - entities, identifiers, ports and errors
pub mod domain {
    pub use snowcache_domain::*;
}

/// Application layer - entity cache adapter and handler ports
pub mod application {
    pub use snowcache_application::*;
}

/// Provider implementations - cache list and identity extractor
pub mod providers {
    pub use snowcache_providers::*;
}

/// Infrastructure layer - configuration, logging and wiring
pub mod infrastructure {
    pub use snowcache_infrastructure::*;
}

// Re-export commonly used types at the crate root
pub use domain::{Entity, Error, Result, Snowflake, User};
pub use application::{AnySnapshotHandler, EntityCache, SnapshotHandler, StreamUpdateHandler};
pub use infrastructure::{AppConfig, ConfigLoader, EntityCaches, UserCache};

/// Load configuration, install logging and create every entity cache
///
/// Call once at process start; the returned caches live for the rest of the
/// process.
pub fn bootstrap(config_path: Option<&Path>) -> Result<(AppConfig, EntityCaches)> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    infrastructure::logging::init_logging(&config.logging)?;
    let caches = EntityCaches::from_config(&config.cache)?;
    Ok((config, caches))
}
