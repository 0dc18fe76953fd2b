//! Constants Tests

use snowcache_infrastructure::constants::*;

#[test]
fn test_config_constants() {
    assert!(DEFAULT_CONFIG_FILENAME.ends_with(".toml"));
    assert!(!CONFIG_ENV_PREFIX.is_empty());
    assert!(!CONFIG_ENV_PREFIX.contains(CONFIG_ENV_SEPARATOR));
    assert!(LOG_FILTER_ENV_VAR.starts_with(CONFIG_ENV_PREFIX));
}

#[test]
fn test_cache_constants() {
    assert!(DEFAULT_USER_CACHE_CAPACITY > 0);
}
