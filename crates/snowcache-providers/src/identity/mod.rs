//! Identity Extractor Implementations
//!
//! | Extractor | Format | Strategy |
//! |-----------|--------|----------|
//! | [`JsonIdentityExtractor`] | JSON | bytewise scan, structured decode fallback |

pub mod json;

pub use json::JsonIdentityExtractor;
