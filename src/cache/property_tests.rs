//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache against a single-threaded model and
//! against its routing and counting guarantees.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

use bytes::Bytes;

use crate::cache::{Cache, SHARD_COUNT};

// == Strategies ==
/// Generates cache keys, including the empty key
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{0,32}".prop_map(|s| s)
}

/// Generates arbitrary byte values, including empty ones
fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..128)
}

/// A single cache operation
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: Vec<u8> },
    Get { key: String },
    Has { key: String },
    Delete { key: String },
}

/// Draws keys from a small pool so operations collide often
fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    let small_key = "[a-e]{1,2}";
    prop_oneof![
        (small_key, value_strategy()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        small_key.prop_map(|key| CacheOp::Get { key }),
        small_key.prop_map(|key| CacheOp::Has { key }),
        small_key.prop_map(|key| CacheOp::Delete { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of operations, the cache behaves exactly like a
    // single HashMap.
    #[test]
    fn prop_matches_hashmap_model(ops in prop::collection::vec(cache_op_strategy(), 1..100)) {
        let cache = Cache::new();
        let mut model: HashMap<String, Vec<u8>> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    cache.set(key.clone(), value.clone());
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    let expected = model.get(&key).map(|v| Bytes::from(v.clone()));
                    prop_assert_eq!(cache.get(&key), expected, "Get mismatch for {:?}", key);
                }
                CacheOp::Has { key } => {
                    prop_assert_eq!(cache.has(&key), model.contains_key(&key));
                }
                CacheOp::Delete { key } => {
                    cache.delete(&key);
                    model.remove(&key);
                }
            }
            prop_assert_eq!(cache.len(), model.len(), "Len mismatch");
        }
    }

    // Storing a pair and reading it back returns the exact bytes stored.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let cache = Cache::new();
        cache.set(key.clone(), value.clone());

        let retrieved = cache.get(&key);
        prop_assert_eq!(retrieved.as_deref(), Some(value.as_slice()), "Round-trip value mismatch");
    }

    // After Delete, Get reports not found.
    #[test]
    fn prop_delete_removes_entry(key in key_strategy(), value in value_strategy()) {
        let cache = Cache::new();
        cache.set(key.clone(), value);
        prop_assert!(cache.has(&key), "Key should exist before delete");

        cache.delete(&key);

        prop_assert!(cache.get(&key).is_none(), "Key should not exist after delete");
        prop_assert!(cache.is_empty());
    }

    // Deleting an absent key leaves the cache unchanged.
    #[test]
    fn prop_idempotent_delete(
        entries in prop::collection::hash_map(key_strategy(), value_strategy(), 0..20),
        absent in key_strategy()
    ) {
        prop_assume!(!entries.contains_key(&absent));

        let cache = Cache::new();
        for (key, value) in &entries {
            cache.set(key.clone(), value.clone());
        }

        cache.delete(&absent);
        cache.delete(&absent);

        prop_assert_eq!(cache.len(), entries.len());
        for key in entries.keys() {
            prop_assert!(cache.has(key));
        }
    }

    // The last write to a key wins.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let cache = Cache::new();
        cache.set(key.clone(), value1);
        cache.set(key.clone(), value2.clone());

        let retrieved = cache.get(&key);
        prop_assert_eq!(
            retrieved.as_deref(),
            Some(value2.as_slice()),
            "Overwrite should return new value"
        );
        prop_assert_eq!(cache.len(), 1, "Should have exactly one entry after overwrite");
    }

    // Has agrees with Get for every key, present or not.
    #[test]
    fn prop_has_matches_get(
        stored in prop::collection::vec(key_strategy(), 0..20),
        probes in prop::collection::vec(key_strategy(), 1..20)
    ) {
        let cache = Cache::new();
        for key in &stored {
            cache.set(key.clone(), "v");
        }

        for key in stored.iter().chain(probes.iter()) {
            prop_assert_eq!(cache.has(key), cache.get(key).is_some());
        }
    }

    // The same key always routes to the same in-range shard.
    #[test]
    fn prop_routing_determinism(key in ".*") {
        let cache = Cache::new();
        let index = cache.shard_index(&key);

        prop_assert!(index < SHARD_COUNT);
        cache.set(key.clone(), "v");
        prop_assert_eq!(cache.shard_index(&key), index);
        prop_assert_eq!(Cache::new().shard_index(&key), index);
        prop_assert_eq!(cache.shard_lens()[index], 1);
    }

    // S distinct sets give Len == S; deleting D of them gives S - D.
    #[test]
    fn prop_len_bounds(
        keys in prop::collection::hash_set(key_strategy(), 0..100),
        delete_count in 0usize..100
    ) {
        let cache = Cache::new();
        let keys: Vec<String> = keys.into_iter().collect();
        for key in &keys {
            cache.set(key.clone(), "v");
        }
        prop_assert_eq!(cache.len(), keys.len());

        let deleted = delete_count.min(keys.len());
        for key in keys.iter().take(deleted) {
            cache.delete(key);
        }
        prop_assert_eq!(cache.len(), keys.len() - deleted);
    }
}

// == Property Test for Concurrent Operation Correctness ==
// Writers own disjoint key sets; readers run alongside them.

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // Concurrent readers only ever see complete values, and every write is
    // visible once its writer has been joined.
    #[test]
    fn prop_concurrent_operation_correctness(
        writer_keys in prop::collection::vec(
            prop::collection::hash_set("[a-z]{1,8}", 1..30),
            2..6
        ),
        reader_count in 1usize..4
    ) {
        // Prefix each writer's keys so the sets are disjoint
        let batches: Vec<Vec<String>> = writer_keys
            .into_iter()
            .enumerate()
            .map(|(w, keys)| keys.into_iter().map(|k| format!("w{w}-{k}")).collect())
            .collect();
        let all_keys: Vec<String> = batches.iter().flatten().cloned().collect();
        let cache = Cache::new();

        let torn_reads: usize = std::thread::scope(|scope| {
            for batch in &batches {
                let cache = &cache;
                scope.spawn(move || {
                    for key in batch {
                        cache.set(key.as_str(), key.clone().into_bytes());
                    }
                });
            }

            let readers: Vec<_> = (0..reader_count)
                .map(|_| {
                    let cache = &cache;
                    let all_keys = &all_keys;
                    scope.spawn(move || {
                        all_keys
                            .iter()
                            .filter(|key| {
                                cache
                                    .get(key)
                                    .is_some_and(|value| &value[..] != key.as_bytes())
                            })
                            .count()
                    })
                })
                .collect();

            readers
                .into_iter()
                .map(|r| r.join().expect("Reader should not panic"))
                .sum()
        });

        prop_assert_eq!(torn_reads, 0, "Readers observed partial values");

        let unique: HashSet<&String> = all_keys.iter().collect();
        prop_assert_eq!(cache.len(), unique.len());
        for key in &all_keys {
            let value = cache.get(key);
            prop_assert_eq!(value.as_deref(), Some(key.as_bytes()));
        }
    }
}
