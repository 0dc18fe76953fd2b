//! Ingestion Handler Ports
//!
//! Data reaches a cache along two routes:
//!
//! | Route | Producer | Payload | Merge |
//! |-------|----------|---------|-------|
//! | [`StreamUpdateHandler`] | live event feed | raw bytes, possibly partial | field overlay |
//! | [`SnapshotHandler`] | request/response exchange | fully typed entity | full overwrite |
//!
//! [`AnySnapshotHandler`] is the object-safe form of the snapshot route for
//! producers that only hold type-erased responses.

use snowcache_domain::error::Result;
use std::any::Any;

/// Accepts raw streaming updates
pub trait StreamUpdateHandler: Send + Sync {
    /// Merge or insert the entity described by `raw`
    fn handle_stream_update(&self, raw: &[u8]) -> Result<()>;
}

/// Accepts fully populated entities from point-in-time responses
pub trait SnapshotHandler<T>: Send + Sync {
    /// Copy or insert `entity`; `None` is a no-op
    fn handle_snapshot_response(&self, entity: Option<T>) -> Result<()>;
}

/// Type-erased snapshot route
pub trait AnySnapshotHandler: Send + Sync {
    /// Entity kind this handler accepts
    fn entity_kind(&self) -> &'static str;

    /// Downcast `entity` to the handled type and ingest it
    ///
    /// Returns `TypeMismatch` when `entity` is not the handled type.
    fn handle_any_snapshot(&self, entity: Box<dyn Any + Send>) -> Result<()>;
}
