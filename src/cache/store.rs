//! Cache Store Module
//!
//! The sharded cache: routes every key to one of a fixed set of shards.

use std::fmt;

use bytes::Bytes;
use tracing::debug;

use crate::cache::hash::{Fnv1a, KeyHasher};
use crate::cache::shard::Shard;
use crate::cache::{SHARD_COUNT, SHARD_MASK};

// == Cache ==
/// A thread-safe in-memory key-value cache.
///
/// Keys are spread over [`SHARD_COUNT`] shards by hashing, each shard
/// guarded by its own reader/writer lock, so operations on keys in different
/// shards never contend. Share one instance across threads with an `Arc`.
///
/// # Example
/// ```
/// use infux::Cache;
///
/// let cache = Cache::new();
/// cache.set("a", "1");
/// assert_eq!(cache.get("a").as_deref(), Some(&b"1"[..]));
/// assert!(!cache.has("b"));
/// ```
pub struct Cache<H = Fnv1a> {
    /// Always exactly `SHARD_COUNT` long
    shards: Box<[Shard]>,
    /// Routing hash
    hasher: H,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache routed by FNV-1a.
    pub fn new() -> Self {
        Self::with_hasher(Fnv1a)
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: KeyHasher> Cache<H> {
    /// Creates an empty cache that routes keys with `hasher`.
    pub fn with_hasher(hasher: H) -> Self {
        let shards: Box<[Shard]> = (0..SHARD_COUNT).map(|_| Shard::new()).collect();
        debug!(shards = SHARD_COUNT, "cache initialized");
        Self { shards, hasher }
    }

    // == Routing ==
    /// Returns the index of the shard that owns `key`.
    ///
    /// Stable for the lifetime of the cache.
    #[inline]
    pub fn shard_index(&self, key: &str) -> usize {
        self.hasher.hash_key(key.as_bytes()) as usize & SHARD_MASK
    }

    #[inline]
    fn shard(&self, key: &str) -> &Shard {
        &self.shards[self.shard_index(key)]
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        self.shard(&key).put(key, value.into());
    }

    // == Get ==
    /// Returns the value stored under `key`, or `None` if absent.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.shard(key).get(key)
    }

    // == Has ==
    /// Returns true if `key` is present. Same answer as `get(key).is_some()`.
    pub fn has(&self, key: &str) -> bool {
        self.shard(key).contains(key)
    }

    // == Delete ==
    /// Removes `key`. Deleting an absent key does nothing.
    pub fn delete(&self, key: &str) {
        self.shard(key).remove(key);
    }

    // == Length ==
    /// Returns the total number of entries.
    ///
    /// Shards are counted one at a time, each under its own read lock, so
    /// concurrent writers may change the true total while counting is in
    /// progress. The result is exact when no writers are active.
    pub fn len(&self) -> usize {
        self.shards.iter().map(Shard::size).sum()
    }

    // == Is Empty ==
    /// Returns true if no shard holds an entry. Same consistency as [`Cache::len`].
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of entries in each shard, in shard index order.
    pub fn shard_lens(&self) -> Vec<usize> {
        self.shards.iter().map(Shard::size).collect()
    }

    /// Returns the number of shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }
}

impl<H: fmt::Debug> fmt::Debug for Cache<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("shards", &self.shards.len())
            .field("hasher", &self.hasher)
            .finish()
    }
}
