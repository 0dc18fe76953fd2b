//! # Snowcache Infrastructure
//!
//! Cross-cutting technical concerns for the entity cache:
//!
//! - [`config`] - Figment-based layered configuration
//! - [`logging`] - tracing subscriber installation
//! - [`error_ext`] - context helpers converting foreign errors into domain errors
//! - [`cache`] - concrete wiring of entity caches from configuration

pub mod cache;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use cache::{EntityCaches, UserCache};
pub use config::{AppConfig, ConfigLoader};
