//! Cache Module
//!
//! Sharded in-memory key-value storage. Each key is hashed with FNV-1a and
//! routed to one of [`SHARD_COUNT`] independently locked shards.

mod hash;
mod shard;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use hash::{fnv1a_32, Fnv1a, KeyHasher};
pub use store::Cache;

// == Public Constants ==
/// Number of shards in every cache. Must be a power of two.
pub const SHARD_COUNT: usize = 256;

/// Mask reducing a hash to a shard index.
pub(crate) const SHARD_MASK: usize = SHARD_COUNT - 1;

const _: () = assert!(SHARD_COUNT.is_power_of_two());
