//! Workload report model
//!
//! The summary printed by the workload driver after a run.

use std::time::Duration;

use serde::Serialize;

/// Operation counts gathered by one or more workers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OpCounts {
    /// Get operations issued
    pub reads: u64,
    /// Gets that found a value
    pub hits: u64,
    /// Set operations issued
    pub writes: u64,
    /// Delete operations issued
    pub deletes: u64,
}

impl OpCounts {
    /// Total operations issued.
    pub fn total(&self) -> u64 {
        self.reads + self.writes + self.deletes
    }

    /// Adds another worker's counts to these.
    pub fn merge(&mut self, other: OpCounts) {
        self.reads += other.reads;
        self.hits += other.hits;
        self.writes += other.writes;
        self.deletes += other.deletes;
    }
}

/// Summary of a completed workload run.
#[derive(Debug, Clone, Serialize)]
pub struct WorkloadReport {
    /// Worker threads used
    pub workers: usize,
    /// Base seed the workers' generators were derived from
    pub seed: u64,
    /// Combined operation counts
    pub ops: OpCounts,
    /// Fraction of reads that hit (0.0 when no reads)
    pub hit_rate: f64,
    /// Wall-clock duration of the run in milliseconds
    pub elapsed_ms: f64,
    /// Operations per second over the whole run
    pub ops_per_sec: f64,
    /// Cache length after all workers finished
    pub final_len: usize,
    /// Number of shards in the cache
    pub shard_count: usize,
    /// Fewest entries held by any shard
    pub min_shard_len: usize,
    /// Most entries held by any shard
    pub max_shard_len: usize,
}

impl WorkloadReport {
    /// Creates a report from merged counts and the cache's final shard sizes.
    pub fn new(
        workers: usize,
        seed: u64,
        ops: OpCounts,
        elapsed: Duration,
        shard_lens: &[usize],
    ) -> Self {
        let hit_rate = if ops.reads > 0 {
            ops.hits as f64 / ops.reads as f64
        } else {
            0.0
        };
        let secs = elapsed.as_secs_f64();
        let ops_per_sec = if secs > 0.0 {
            ops.total() as f64 / secs
        } else {
            0.0
        };

        Self {
            workers,
            seed,
            ops,
            hit_rate,
            elapsed_ms: secs * 1000.0,
            ops_per_sec,
            final_len: shard_lens.iter().sum(),
            shard_count: shard_lens.len(),
            min_shard_len: shard_lens.iter().copied().min().unwrap_or(0),
            max_shard_len: shard_lens.iter().copied().max().unwrap_or(0),
        }
    }
}
