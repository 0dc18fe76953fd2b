//! Application Layer - Snowcache
//!
//! Binds a capacity-bounded store to a concrete entity type and exposes the
//! two ingestion paths an API client feeds it from.
//!
//! ## Use Cases
//!
//! - [`EntityCache`](use_cases::EntityCache): thread-safe lookups plus
//!   stream-update and snapshot-response ingestion
//!
//! ## Ports (Interfaces)
//!
//! - `ports::handlers::*`: what upstream producers call into
//!
//! ## Dependencies
//!
//! This crate depends only on `snowcache-domain`. The concrete store and
//! identity extractor are injected by `snowcache-infrastructure`.

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
