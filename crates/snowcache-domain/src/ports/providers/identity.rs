//! Identity Extractor Port

use crate::error::Result;
use crate::value_objects::Snowflake;

/// Resolves the identifier of an entity from its raw serialized form
///
/// Implementations must reject a zero identifier with
/// [`Error::IdentityNotFound`](crate::error::Error::IdentityNotFound); it is
/// never a valid cache key.
pub trait IdentityExtractor: Send + Sync {
    /// Extract the top-level identifier from `raw`
    fn extract_id(&self, raw: &[u8]) -> Result<Snowflake>;
}
