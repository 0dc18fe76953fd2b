//! Entity Cache Tests
//!
//! Exercises both ingestion routes against the real cache list store and
//! JSON identity extractor.

use snowcache_application::use_cases::EntityCache;
use snowcache_domain::{Snowflake, User};
use snowcache_providers::{CacheList, JsonIdentityExtractor};
use std::collections::BTreeSet;

type Users = EntityCache<User, CacheList<User>, JsonIdentityExtractor>;

fn users(capacity: usize) -> Users {
    EntityCache::new(CacheList::new(capacity).unwrap(), JsonIdentityExtractor::new())
}

fn ids(cache: &Users) -> BTreeSet<u64> {
    cache.list_ids().into_iter().map(u64::from).collect()
}

fn sf(id: u64) -> Snowflake {
    Snowflake::new(id)
}

#[test]
fn test_stream_update_inserts_new_entity() {
    let cache = users(4);
    cache
        .handle_stream_update(br#"{"id":"1","username":"nelly","bot":true}"#)
        .unwrap();

    let user = cache.get(sf(1)).unwrap();
    assert_eq!(user.username, "nelly");
    assert!(user.bot);
    assert_eq!(cache.size(), 1);
}

#[test]
fn test_stream_update_merges_present_fields_only() {
    let cache = users(4);
    cache
        .handle_stream_update(
            br#"{"id":"1","username":"nelly","discriminator":"0001","locale":"en-US"}"#,
        )
        .unwrap();
    cache
        .handle_stream_update(br#"{"id":"1","username":"nelly2"}"#)
        .unwrap();

    let user = cache.get(sf(1)).unwrap();
    assert_eq!(user.username, "nelly2");
    assert_eq!(user.discriminator, "0001");
    assert_eq!(user.locale.as_deref(), Some("en-US"));
    assert_eq!(cache.size(), 1);
}

#[test]
fn test_stream_update_without_identity_creates_nothing() {
    let cache = users(4);
    let err = cache
        .handle_stream_update(br#"{"username":"ghost"}"#)
        .unwrap_err();

    assert!(err.is_identity_not_found());
    assert_eq!(cache.size(), 0);
}

#[test]
fn test_stream_update_decode_failure_inserts_nothing() {
    let cache = users(4);
    let err = cache
        .handle_stream_update(br#"{"id":"1","bot":"yes"}"#)
        .unwrap_err();

    assert!(err.is_decode());
    assert!(cache.get(sf(1)).is_none());
}

#[test]
fn test_failed_merge_leaves_cached_entity_intact() {
    let cache = users(4);
    cache
        .handle_stream_update(br#"{"id":"1","username":"nelly"}"#)
        .unwrap();
    let err = cache
        .handle_stream_update(br#"{"id":"1","username":"x","bot":"yes"}"#)
        .unwrap_err();

    assert!(err.is_decode());
    assert_eq!(cache.get(sf(1)).unwrap().username, "nelly");
}

#[test]
fn test_snapshot_inserts_and_overwrites() {
    let cache = users(4);
    let mut user = User::new(sf(1), "nelly");
    user.locale = Some("en-US".to_string());
    cache.handle_snapshot_response(Some(user)).unwrap();

    // A snapshot replaces every field, including ones it leaves at default
    cache
        .handle_snapshot_response(Some(User::new(sf(1), "renamed")))
        .unwrap();

    let cached = cache.get(sf(1)).unwrap();
    assert_eq!(cached.username, "renamed");
    assert_eq!(cached.locale, None);
    assert_eq!(cache.size(), 1);
}

#[test]
fn test_snapshot_none_is_noop() {
    let cache = users(4);
    cache.handle_snapshot_response(None).unwrap();
    assert_eq!(cache.size(), 0);
}

#[test]
fn test_snapshot_with_zero_id_is_rejected() {
    let cache = users(4);
    let err = cache
        .handle_snapshot_response(Some(User::new(Snowflake::default(), "nobody")))
        .unwrap_err();

    assert!(err.is_identity_not_found());
    assert_eq!(cache.size(), 0);
}

#[test]
fn test_snapshot_keeps_insertion_order() {
    let cache = users(2);
    cache.handle_snapshot_response(Some(User::new(sf(1), "a"))).unwrap();
    cache.handle_snapshot_response(Some(User::new(sf(2), "b"))).unwrap();

    // Overwriting 1 must not make it look newer than 2
    cache
        .handle_snapshot_response(Some(User::new(sf(1), "a2")))
        .unwrap();
    cache.handle_snapshot_response(Some(User::new(sf(3), "c"))).unwrap();

    assert_eq!(ids(&cache), BTreeSet::from([2, 3]));
}

#[test]
fn test_snapshot_keeps_usage_score() {
    let cache = users(2);
    cache.handle_snapshot_response(Some(User::new(sf(1), "a"))).unwrap();
    cache.handle_snapshot_response(Some(User::new(sf(2), "b"))).unwrap();
    assert!(cache.touch(sf(1), 1));

    cache
        .handle_snapshot_response(Some(User::new(sf(1), "a2")))
        .unwrap();
    cache.handle_snapshot_response(Some(User::new(sf(3), "c"))).unwrap();

    assert_eq!(ids(&cache), BTreeSet::from([1, 3]));
    assert_eq!(cache.get(sf(1)).unwrap().username, "a2");
}

#[test]
fn test_stream_merge_keeps_insertion_order() {
    let cache = users(2);
    cache.handle_stream_update(br#"{"id":"1"}"#).unwrap();
    cache.handle_stream_update(br#"{"id":"2"}"#).unwrap();
    cache
        .handle_stream_update(br#"{"id":"1","username":"late"}"#)
        .unwrap();
    cache.handle_stream_update(br#"{"id":"3"}"#).unwrap();

    assert_eq!(ids(&cache), BTreeSet::from([2, 3]));
}

#[test]
fn test_touch_and_delete_on_absent_entry() {
    let cache = users(2);
    assert!(!cache.touch(sf(9), 1));
    assert!(!cache.delete(sf(9)));

    cache.handle_snapshot_response(Some(User::new(sf(9), "x"))).unwrap();
    assert!(cache.delete(sf(9)));
    assert!(cache.get(sf(9)).is_none());
}

#[test]
fn test_fifo_eviction_through_cache() {
    let cache = users(10);
    for id in 1..=255u64 {
        let raw = format!(r#"{{"id":"{id}","username":"u{id}"}}"#);
        cache.handle_stream_update(raw.as_bytes()).unwrap();
    }

    assert_eq!(cache.size(), 10);
    assert_eq!(cache.cap(), 10);
    assert_eq!(ids(&cache), (246..=255).collect());
}

#[test]
fn test_get_returns_independent_copy() {
    let cache = users(2);
    cache.handle_snapshot_response(Some(User::new(sf(1), "a"))).unwrap();

    let mut copy = cache.get(sf(1)).unwrap();
    copy.username.push_str("-modified");
    assert_eq!(cache.get(sf(1)).unwrap().username, "a");
}

#[test]
fn test_with_entity_borrows_cached_value() {
    let cache = users(2);
    cache.handle_snapshot_response(Some(User::new(sf(1), "a"))).unwrap();

    assert_eq!(cache.with_entity(sf(1), |u| u.username.len()), Some(1));
    assert_eq!(cache.with_entity(sf(2), |u| u.username.len()), None);
}

#[test]
fn test_for_each_visits_every_resident_entity() {
    let cache = users(8);
    for id in 1..=5u64 {
        cache
            .handle_snapshot_response(Some(User::new(sf(id), format!("u{id}"))))
            .unwrap();
    }

    let mut seen = BTreeSet::new();
    cache.for_each(|user| {
        seen.insert(u64::from(user.id));
    });
    assert_eq!(seen, (1..=5).collect());
}

#[test]
fn test_for_each_callback_may_reenter_cache() {
    let cache = users(8);
    cache.handle_snapshot_response(Some(User::new(sf(1), "a"))).unwrap();
    cache.handle_snapshot_response(Some(User::new(sf(2), "b"))).unwrap();

    // No lock is held while the callback runs
    cache.for_each(|user| {
        cache.delete(user.id);
    });
    assert_eq!(cache.size(), 0);
}

#[test]
fn test_stats_track_hits_and_misses() {
    let cache = users(2);
    cache.handle_snapshot_response(Some(User::new(sf(1), "a"))).unwrap();
    cache.get(sf(1));
    cache.get(sf(1));
    cache.get(sf(2));
    cache.handle_snapshot_response(Some(User::new(sf(2), "b"))).unwrap();
    cache.handle_snapshot_response(Some(User::new(sf(3), "c"))).unwrap();

    let stats = cache.stats();
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.entries, 2);
    assert_eq!(stats.capacity, 2);
    assert_eq!(stats.evictions, 1);
}

#[test]
fn test_concurrent_ingestion_and_reads() {
    let cache = users(32);
    std::thread::scope(|scope| {
        for worker in 0..4u64 {
            let cache = &cache;
            scope.spawn(move || {
                for n in 1..=200u64 {
                    let id = worker * 1_000 + n;
                    let raw = format!(r#"{{"id":"{id}","username":"w{worker}"}}"#);
                    cache.handle_stream_update(raw.as_bytes()).unwrap();
                    cache
                        .handle_snapshot_response(Some(User::new(sf(id), "snap")))
                        .unwrap();
                    let _ = cache.get(sf(id));
                    assert!(cache.size() <= 32);
                }
            });
        }
        scope.spawn(|| {
            for _ in 0..100 {
                cache.for_each(|user| assert!(!user.id.is_empty()));
            }
        });
    });

    assert_eq!(cache.size(), 32);
}
