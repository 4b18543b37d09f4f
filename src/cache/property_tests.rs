//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the store's core behavioral properties.

use proptest::prelude::*;
use std::collections::HashSet;
use std::thread::sleep;
use std::time::{Duration, Instant};

use crate::cache::CacheStore;

// == Test Configuration ==
/// TTL long enough that nothing goes stale mid-test.
const LONG_TTL: Duration = Duration::from_secs(60);

// == Strategies ==
/// Generates cache keys, including the empty key.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_/:.-]{0,32}"
}

/// Generates arbitrary byte values, including empty ones.
fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

/// The payload every concurrent writer stores for a given key, so any read
/// can be checked for completeness against the key alone.
fn payload_for(key: &str) -> Vec<u8> {
    format!("payload for {}", key).into_bytes()
}

/// A sequence element for exercising the store.
#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, value: Vec<u8> },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Add { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // *For any* sequence of adds and gets, the statistics count exactly the
    // hits and misses that occurred, and total_entries matches the store size.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut store = CacheStore::new(LONG_TTL);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Add { key, value } => {
                    store.add(key, value);
                }
                CacheOp::Get { key } => {
                    match store.get(&key) {
                        Some(_) => expected_hits += 1,
                        None => expected_misses += 1,
                    }
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, store.len(), "Total entries mismatch");
    }

    // *For any* key-value pair, adding the pair and then retrieving it
    // returns exactly the bytes that were stored.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new(LONG_TTL);

        store.add(key.clone(), value.clone());

        let retrieved = store.get(&key);
        prop_assert_eq!(retrieved, Some(value), "Round-trip value mismatch");
    }

    // *For any* key, adding V1 and then V2 under the same key leaves a single
    // entry holding V2.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut store = CacheStore::new(LONG_TTL);

        store.add(key.clone(), value1);
        store.add(key.clone(), value2.clone());

        prop_assert_eq!(store.get(&key), Some(value2), "Overwrite should return new value");
        prop_assert_eq!(store.len(), 1, "Should have exactly one entry after overwrite");
    }

    // *For any* stored entry, reads are idempotent: repeated gets keep
    // returning the value and never remove the entry.
    #[test]
    fn prop_get_leaves_entry_in_place(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new(LONG_TTL);

        store.add(key.clone(), value.clone());

        for _ in 0..3 {
            prop_assert_eq!(store.get(&key), Some(value.clone()));
            prop_assert_eq!(store.len(), 1);
        }
    }

    // *For any* batch of fresh entries, a sweep removes nothing.
    #[test]
    fn prop_fresh_entries_survive_sweep(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..20)
    ) {
        let mut store = CacheStore::new(LONG_TTL);

        for (key, value) in &entries {
            store.add(key.clone(), value.clone());
        }

        let removed = store.reclaim_stale_at(Instant::now());
        prop_assert_eq!(removed, 0, "Fresh entries must not be reclaimed");

        for (key, _) in &entries {
            prop_assert!(store.get(key).is_some(), "Entry '{}' disappeared", key);
        }
    }

    // *For any* batch of entries, a sweep one whole TTL in the future removes
    // every entry, and the reclaimed counter records the removals.
    #[test]
    fn prop_stale_entries_all_reclaimed(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..20)
    ) {
        let ttl = Duration::from_secs(1);
        let mut store = CacheStore::new(ttl);

        let unique_keys: HashSet<&String> = entries.iter().map(|(key, _)| key).collect();
        for (key, value) in &entries {
            store.add(key.clone(), value.clone());
        }

        let removed = store.reclaim_stale_at(Instant::now() + ttl);
        prop_assert_eq!(removed, unique_keys.len(), "Every entry should be stale");
        prop_assert_eq!(store.len(), 0);
        prop_assert_eq!(store.stats().reclaimed, unique_keys.len() as u64);
    }
}

// Separate proptest block with fewer cases for time-sensitive staleness tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // *For any* entry, going past its TTL does not affect reads until a sweep
    // runs; the sweep is the only thing that removes it.
    #[test]
    fn prop_stale_entry_readable_until_swept(key in key_strategy(), value in value_strategy()) {
        let ttl = Duration::from_millis(50);
        let mut store = CacheStore::new(ttl);

        store.add(key.clone(), value.clone());

        // Well past the TTL now, but no sweep has run
        sleep(Duration::from_millis(80));
        prop_assert_eq!(store.get(&key), Some(value), "Unswept entry must stay readable");

        // The sweep removes it
        prop_assert_eq!(store.reclaim_stale(), 1);
        prop_assert_eq!(store.get(&key), None);
    }
}

// == Property Test for Concurrent Operation Correctness ==
// Exercises shared access through Arc<RwLock<CacheStore>>

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // *For any* interleaving of concurrent adds and gets, every successful
    // read observes a complete payload for its key, never partial data, and
    // the final statistics are internally consistent.
    #[test]
    fn prop_concurrent_operation_correctness(
        initial_keys in prop::collection::vec(key_strategy(), 1..20),
        op_keys in prop::collection::vec((any::<bool>(), key_strategy()), 10..50)
    ) {
        use std::sync::Arc;
        use tokio::sync::RwLock;

        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let store = Arc::new(RwLock::new(CacheStore::new(LONG_TTL)));

            // Populate with deterministic payloads
            {
                let mut store_guard = store.write().await;
                for key in &initial_keys {
                    store_guard.add(key.clone(), payload_for(key));
                }
            }

            // Spawn one task per operation
            let mut handles = vec![];
            for (is_add, key) in op_keys {
                let store_clone = Arc::clone(&store);

                let handle = tokio::spawn(async move {
                    if is_add {
                        let mut store_guard = store_clone.write().await;
                        store_guard.add(key.clone(), payload_for(&key));
                        Ok::<_, String>(())
                    } else {
                        let mut store_guard = store_clone.write().await;
                        match store_guard.get(&key) {
                            // Every writer stores payload_for(key), so any
                            // successful read must see exactly that
                            Some(value) if value == payload_for(&key) => Ok(()),
                            Some(_) => Err(format!("Partial or foreign payload for key '{}'", key)),
                            None => Ok(()),
                        }
                    }
                });

                handles.push(handle);
            }

            // Wait for all tasks to complete and check for errors
            for handle in handles {
                let result = handle.await.expect("Task should not panic");
                prop_assert!(result.is_ok(), "Concurrent operation failed: {:?}", result);
            }

            // Final state must be internally consistent
            let store_guard = store.read().await;
            let stats = store_guard.stats();
            prop_assert_eq!(stats.total_entries, store_guard.len(), "Stats out of sync with store");

            let hit_rate = stats.hit_rate();
            prop_assert!(
                (0.0..=1.0).contains(&hit_rate),
                "Hit rate should be between 0 and 1, got {}",
                hit_rate
            );

            Ok(())
        })?;
    }
}

// == Additional Unit Tests for Test Helpers ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_for_is_deterministic() {
        assert_eq!(payload_for("abc"), payload_for("abc"));
        assert_ne!(payload_for("abc"), payload_for("abd"));
    }

    #[test]
    fn test_payload_for_embeds_key() {
        let payload = payload_for("users/42");
        assert!(String::from_utf8(payload).unwrap().contains("users/42"));
    }
}
