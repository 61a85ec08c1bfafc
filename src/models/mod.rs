//! Report models for the workload driver
//!
//! Serializable summaries printed after a workload run.

pub mod report;

// Re-export commonly used types
pub use report::{OpCounts, WorkloadReport};
