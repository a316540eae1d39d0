//! Benchmark parameter types.

use std::fmt;

use disjoint_core::Strategy;

/// Parameters for one union-find benchmark run.
#[derive(Clone, Debug)]
pub struct UnionFindBenchParams {
    /// Strategy under measurement.
    pub strategy: Strategy,
    /// Number of elements in the universe.
    pub len: usize,
}

impl fmt::Display for UnionFindBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.strategy, self.len)
    }
}
