//! Configuration Module
//!
//! Loads workload driver settings from environment variables.

use std::env;
use std::str::FromStr;

use crate::error::{ConfigError, Result};

/// Workload driver configuration.
///
/// All values can be configured via environment variables with sensible
/// defaults. The cache's shard count is fixed and not part of this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of worker threads sharing the cache
    pub workers: usize,
    /// Operations each worker issues
    pub ops_per_worker: u64,
    /// Number of distinct keys the workers draw from
    pub key_space: u64,
    /// Size in bytes of every written value
    pub value_size: usize,
    /// Percentage of operations that are reads (0-100)
    pub read_percent: u8,
    /// Base seed for the per-worker random generators
    pub seed: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `INFUX_WORKERS` - Worker threads (default: 8)
    /// - `INFUX_OPS_PER_WORKER` - Operations per worker (default: 100000)
    /// - `INFUX_KEY_SPACE` - Distinct keys (default: 10000)
    /// - `INFUX_VALUE_SIZE` - Value size in bytes (default: 64)
    /// - `INFUX_READ_PERCENT` - Read percentage (default: 80)
    /// - `INFUX_SEED` - Random seed (default: 42)
    ///
    /// Unset variables fall back to their default; set variables that do
    /// not parse are an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            workers: parse_var(&lookup, "INFUX_WORKERS", defaults.workers)?,
            ops_per_worker: parse_var(&lookup, "INFUX_OPS_PER_WORKER", defaults.ops_per_worker)?,
            key_space: parse_var(&lookup, "INFUX_KEY_SPACE", defaults.key_space)?,
            value_size: parse_var(&lookup, "INFUX_VALUE_SIZE", defaults.value_size)?,
            read_percent: parse_var(&lookup, "INFUX_READ_PERCENT", defaults.read_percent)?,
            seed: parse_var(&lookup, "INFUX_SEED", defaults.seed)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that every setting is within its allowed range.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(ConfigError::OutOfRange {
                field: "workers",
                reason: "must be at least 1",
            });
        }
        if self.key_space == 0 {
            return Err(ConfigError::OutOfRange {
                field: "key_space",
                reason: "must be at least 1",
            });
        }
        if self.read_percent > 100 {
            return Err(ConfigError::OutOfRange {
                field: "read_percent",
                reason: "must be between 0 and 100",
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: 8,
            ops_per_worker: 100_000,
            key_space: 10_000,
            value_size: 64,
            read_percent: 80,
            seed: 42,
        }
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value: raw }),
    }
}
