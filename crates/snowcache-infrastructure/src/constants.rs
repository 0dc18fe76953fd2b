//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `snowcache_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "snowcache.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "snowcache";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SNOWCACHE";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default number of resident users
pub const DEFAULT_USER_CACHE_CAPACITY: usize = 10_000;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV_VAR: &str = "SNOWCACHE_LOG";

/// File stem used for rolling log files when none can be derived
pub const DEFAULT_LOG_FILE_STEM: &str = "snowcache";
