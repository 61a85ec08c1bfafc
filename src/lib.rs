//! Infux - A sharded in-memory key-value cache
//!
//! Keys are hashed with FNV-1a onto a fixed array of independently locked
//! shards, so readers and writers on different shards never block each other.
//! The crate also ships a small workload driver used by the `infux` binary.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod workload;

pub use cache::{Cache, Fnv1a, KeyHasher, SHARD_COUNT};
pub use config::Config;
pub use error::ConfigError;
pub use workload::run_workload;
