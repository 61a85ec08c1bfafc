//! Workload Module
//!
//! Drives a shared cache from several worker threads at once.
//!
//! # Workers
//! - Each worker owns a seeded RNG and issues a mix of reads and writes
//! - All workers share one `&Cache`; no external locking is involved

mod runner;

pub use runner::run_workload;
