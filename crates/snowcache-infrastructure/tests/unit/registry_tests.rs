//! Entity Cache Registry Tests

use snowcache_domain::{Entity, Snowflake, User};
use snowcache_infrastructure::cache::{EntityCaches, create_entity_cache};
use snowcache_infrastructure::config::{CacheConfig, EntityCacheConfig};

fn small_config() -> CacheConfig {
    CacheConfig {
        users: EntityCacheConfig::with_capacity(3),
    }
}

#[test]
fn test_caches_from_config() {
    let caches = EntityCaches::from_config(&small_config()).unwrap();
    assert_eq!(caches.users().cap(), 3);
    assert_eq!(caches.users().size(), 0);
}

#[test]
fn test_zero_capacity_is_rejected() {
    let config = CacheConfig {
        users: EntityCacheConfig::with_capacity(0),
    };
    assert!(EntityCaches::from_config(&config).is_err());
    assert!(create_entity_cache::<User>(&config.users).is_err());
}

#[test]
fn test_snapshot_handler_routing() {
    let caches = EntityCaches::from_config(&small_config()).unwrap();

    let handler = caches.snapshot_handler(User::KIND).unwrap();
    handler
        .handle_any_snapshot(Box::new(User::new(Snowflake::new(5), "five")))
        .unwrap();
    assert_eq!(caches.users().get(Snowflake::new(5)).unwrap().username, "five");

    assert!(caches.snapshot_handler("guild").is_none());
}

#[test]
fn test_stats_keyed_by_kind() {
    let caches = EntityCaches::from_config(&small_config()).unwrap();
    caches
        .users()
        .handle_stream_update(br#"{"id":"1","username":"a"}"#)
        .unwrap();
    caches.users().get(Snowflake::new(1));

    let stats = caches.stats();
    let users = stats.get(User::KIND).unwrap();
    assert_eq!(users.entries, 1);
    assert_eq!(users.hits, 1);
    assert_eq!(users.capacity, 3);
}
