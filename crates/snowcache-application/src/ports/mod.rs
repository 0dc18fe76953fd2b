//! Application Ports
//!
//! Interfaces upstream producers use to push data into a cache.

/// Ingestion handler ports
pub mod handlers;

pub use handlers::{AnySnapshotHandler, SnapshotHandler, StreamUpdateHandler};
