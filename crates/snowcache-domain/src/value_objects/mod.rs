//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity of their own.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Snowflake`] | 64-bit entity identifier, zero means "none" |

/// Snowflake identifier
pub mod snowflake;

pub use snowflake::Snowflake;
