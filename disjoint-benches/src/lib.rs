//! Benchmark support crate for disjoint.
//!
//! Provides seeded union workloads and parameter types used by the Criterion
//! benchmarks comparing the union-find strategies.

pub mod error;
pub mod params;
pub mod workload;
