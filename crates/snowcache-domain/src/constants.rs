//! Domain layer constants
//!
//! Values that are part of the cache contract itself. Deployment defaults
//! (config file names, default capacities) live in
//! `snowcache_infrastructure::constants`.

// ============================================================================
// IDENTITY CONSTANTS
// ============================================================================

/// Name of the top-level identifier field in entity payloads
pub const ENTITY_ID_FIELD: &str = "id";

/// Maximum number of decimal digits in a snowflake (`u64::MAX` has 20)
pub const SNOWFLAKE_MAX_DIGITS: usize = 20;

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Usage score assigned to a freshly created cache item
pub const CACHE_ITEM_INITIAL_SCORE: u64 = 0;
