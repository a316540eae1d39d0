//! Seeded union workloads.
//!
//! A [`Workload`] is a universe size plus a list of unions and queries,
//! generated deterministically so every strategy replays identical input.

use disjoint_core::{DisjointSet, Strategy, UnionFind, UnionFindBuilder};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::BenchSetupError;

/// How the unions of a workload are arranged.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WorkloadShape {
    /// Endpoints drawn uniformly at random.
    Random,
    /// `union(i, i + 1)` for every `i`, building a single path under
    /// unbalanced quick-union.
    Chain,
}

/// Configuration for workload generation.
#[derive(Clone, Copy, Debug)]
pub struct WorkloadConfig {
    /// Number of elements in the universe.
    pub len: usize,
    /// Union arrangement.
    pub shape: WorkloadShape,
    /// Seed for the random number generator.
    pub seed: u64,
}

/// A deterministic sequence of unions and connectivity queries.
#[derive(Clone, Debug)]
pub struct Workload {
    len: usize,
    unions: Vec<(usize, usize)>,
    queries: Vec<(usize, usize)>,
}

impl Workload {
    /// Generates a workload with `len` unions and `len` queries.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when `config.len` is zero.
    pub fn generate(config: &WorkloadConfig) -> Result<Self, BenchSetupError> {
        let len = config.len;
        if len == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "workload universe size",
            });
        }
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let unions = match config.shape {
            WorkloadShape::Random => random_pairs(len, len, &mut rng),
            WorkloadShape::Chain => (1..len).map(|node| (node - 1, node)).collect(),
        };
        let queries = random_pairs(len, len, &mut rng);
        Ok(Self {
            len,
            unions,
            queries,
        })
    }

    /// Number of elements in the universe.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.len }

    /// Returns `true` when the universe is empty; never the case for a
    /// generated workload.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    /// Unions in replay order.
    #[must_use]
    #[rustfmt::skip]
    pub fn unions(&self) -> &[(usize, usize)] { &self.unions }

    /// Queries issued after the unions.
    #[must_use]
    #[rustfmt::skip]
    pub fn queries(&self) -> &[(usize, usize)] { &self.queries }

    /// Builds a fresh set with `strategy` and applies every union.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::UnionFind`] if a union is rejected.
    pub fn apply(&self, strategy: Strategy) -> Result<DisjointSet, BenchSetupError> {
        let mut sets = UnionFindBuilder::new()
            .with_len(self.len)
            .with_strategy(strategy)
            .build();
        for &(p, q) in &self.unions {
            sets.union(p, q)?;
        }
        Ok(sets)
    }

    /// Answers every query against `sets`, returning how many were connected.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::UnionFind`] if a query is rejected.
    pub fn query(&self, sets: &DisjointSet) -> Result<usize, BenchSetupError> {
        let mut connected = 0;
        for &(p, q) in &self.queries {
            if sets.connected(p, q)? {
                connected += 1;
            }
        }
        Ok(connected)
    }
}

fn random_pairs(len: usize, count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    (0..count)
        .map(|_| (rng.gen_range(0..len), rng.gen_range(0..len)))
        .collect()
}
