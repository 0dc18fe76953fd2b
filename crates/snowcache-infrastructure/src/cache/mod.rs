//! Entity cache wiring
//!
//! Binds the application-layer adapter to the provider implementations.

pub mod registry;

pub use registry::{EntityCaches, ListEntityCache, UserCache, create_entity_cache};
