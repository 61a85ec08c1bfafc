//! Shard Module
//!
//! A single partition of the cache key space with its own reader/writer lock.

use std::collections::HashMap;

use bytes::Bytes;
use parking_lot::RwLock;

// == Shard ==
/// One partition of the cache.
///
/// Writers take the lock exclusively, readers share it. A shard never
/// touches any other shard's lock.
#[derive(Debug, Default)]
pub(crate) struct Shard {
    items: RwLock<HashMap<String, Bytes>>,
}

impl Shard {
    // == Constructor ==
    /// Creates an empty shard.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // == Put ==
    /// Inserts or replaces the value stored under `key`.
    pub(crate) fn put(&self, key: String, value: Bytes) {
        self.items.write().insert(key, value);
    }

    // == Get ==
    /// Returns a handle to the value stored under `key`, if any.
    ///
    /// The returned `Bytes` shares the stored buffer; no copy is made.
    pub(crate) fn get(&self, key: &str) -> Option<Bytes> {
        self.items.read().get(key).cloned()
    }

    // == Contains ==
    /// Returns true if `key` is present.
    pub(crate) fn contains(&self, key: &str) -> bool {
        self.items.read().contains_key(key)
    }

    // == Remove ==
    /// Removes `key`. Absent keys are ignored.
    pub(crate) fn remove(&self, key: &str) {
        self.items.write().remove(key);
    }

    // == Size ==
    /// Returns the number of entries held by this shard.
    pub(crate) fn size(&self) -> usize {
        self.items.read().len()
    }
}
