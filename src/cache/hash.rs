//! Key Hashing Module
//!
//! Hash functions used to route keys to shards.

// == FNV-1a Constants ==
const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Computes the 32-bit FNV-1a hash of `bytes`.
#[inline]
pub const fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

// == Key Hasher ==
/// Hashes a key's bytes to a 32-bit value for shard routing.
///
/// Implementations must be pure: the same input always yields the same
/// output. Only the low bits of the result select a shard, so the hash
/// should mix well into them.
pub trait KeyHasher {
    /// Returns the routing hash of `key`.
    fn hash_key(&self, key: &[u8]) -> u32;
}

/// The default routing hash: 32-bit FNV-1a.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fnv1a;

impl KeyHasher for Fnv1a {
    #[inline]
    fn hash_key(&self, key: &[u8]) -> u32 {
        fnv1a_32(key)
    }
}
