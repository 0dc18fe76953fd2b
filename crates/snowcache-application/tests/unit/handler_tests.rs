//! Ingestion Handler Port Tests
//!
//! Drives the cache through its trait objects, the way producers see it.

use snowcache_application::ports::{AnySnapshotHandler, SnapshotHandler, StreamUpdateHandler};
use snowcache_application::use_cases::EntityCache;
use snowcache_domain::{Error, Snowflake, User};
use snowcache_providers::{CacheList, JsonIdentityExtractor};

fn users() -> EntityCache<User, CacheList<User>, JsonIdentityExtractor> {
    EntityCache::new(CacheList::new(4).unwrap(), JsonIdentityExtractor::new())
}

#[test]
fn test_stream_handler_object() {
    let cache = users();
    let handler: &dyn StreamUpdateHandler = &cache;
    handler
        .handle_stream_update(br#"{"id":"7","username":"seven"}"#)
        .unwrap();

    assert_eq!(cache.get(Snowflake::new(7)).unwrap().username, "seven");
}

#[test]
fn test_snapshot_handler_object() {
    let cache = users();
    let handler: &dyn SnapshotHandler<User> = &cache;
    handler
        .handle_snapshot_response(Some(User::new(Snowflake::new(7), "seven")))
        .unwrap();
    handler.handle_snapshot_response(None).unwrap();

    assert_eq!(cache.size(), 1);
}

#[test]
fn test_any_snapshot_handler_accepts_matching_type() {
    let cache = users();
    let handler: &dyn AnySnapshotHandler = &cache;
    assert_eq!(handler.entity_kind(), "user");

    handler
        .handle_any_snapshot(Box::new(User::new(Snowflake::new(3), "three")))
        .unwrap();
    assert!(cache.get(Snowflake::new(3)).is_some());
}

#[test]
fn test_any_snapshot_handler_rejects_other_types() {
    let cache = users();
    let handler: &dyn AnySnapshotHandler = &cache;

    let err = handler
        .handle_any_snapshot(Box::new("not a user".to_string()))
        .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
    assert_eq!(cache.size(), 0);
}
