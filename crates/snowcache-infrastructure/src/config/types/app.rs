//! Application configuration root

use super::{CacheConfig, LoggingConfig};
use serde::{Deserialize, Serialize};

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Entity cache capacities
    pub cache: CacheConfig,

    /// Logging
    pub logging: LoggingConfig,
}
