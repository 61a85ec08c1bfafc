//! Workload Runner
//!
//! Spawns worker threads against one cache and collects their counts.

use std::panic;
use std::thread;
use std::time::Instant;

use bytes::Bytes;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{OpCounts, WorkloadReport};

/// Share of writes that are deletes instead of sets, out of 10.
const DELETE_TENTHS: u32 = 1;

/// Runs the configured workload against `cache` and reports the result.
///
/// One scoped thread is spawned per worker; the call returns once every
/// worker has finished. A panicking worker is re-raised on the caller.
///
/// # Errors
/// Returns [`crate::ConfigError::OutOfRange`] if `config` fails
/// [`Config::validate`]; no worker is started in that case.
///
/// # Example
/// ```
/// use infux::{run_workload, Cache, Config};
///
/// let cache = Cache::new();
/// let config = Config { workers: 2, ops_per_worker: 100, ..Config::default() };
/// let report = run_workload(&cache, &config).unwrap();
/// assert_eq!(report.ops.total(), 200);
/// ```
pub fn run_workload(cache: &Cache, config: &Config) -> Result<WorkloadReport> {
    config.validate()?;

    let value = Bytes::from(vec![b'x'; config.value_size]);
    let started = Instant::now();

    let ops = thread::scope(|scope| {
        let handles: Vec<_> = (0..config.workers)
            .map(|worker| {
                let value = value.clone();
                scope.spawn(move || run_worker(cache, config, worker, &value))
            })
            .collect();

        let mut ops = OpCounts::default();
        for handle in handles {
            match handle.join() {
                Ok(counts) => ops.merge(counts),
                Err(payload) => panic::resume_unwind(payload),
            }
        }
        ops
    });

    Ok(WorkloadReport::new(
        config.workers,
        config.seed,
        ops,
        started.elapsed(),
        &cache.shard_lens(),
    ))
}

/// Runs a single worker's share of the workload.
///
/// Keys are `key-{n}` with `n` uniform in `0..key_space`. Each operation is
/// a get with probability `read_percent`%, otherwise a set, or occasionally
/// a delete. `config` must already be validated.
pub(crate) fn run_worker(
    cache: &Cache,
    config: &Config,
    worker: usize,
    value: &Bytes,
) -> OpCounts {
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(worker as u64));
    let mut counts = OpCounts::default();

    for _ in 0..config.ops_per_worker {
        let key = format!("key-{}", rng.gen_range(0..config.key_space));

        if rng.gen_range(0..100u8) < config.read_percent {
            counts.reads += 1;
            if cache.get(&key).is_some() {
                counts.hits += 1;
            }
        } else if rng.gen_ratio(DELETE_TENTHS, 10) {
            cache.delete(&key);
            counts.deletes += 1;
        } else {
            cache.set(key, value.clone());
            counts.writes += 1;
        }
    }

    debug!(worker, ops = counts.total(), hits = counts.hits, "worker finished");
    counts
}
