//! Strategy selection and construction.
//!
//! Callers pick a [`Strategy`] to match their workload: read-heavy code
//! favours [`Strategy::QuickFind`], write-heavy code or code needing bounded
//! latency favours [`Strategy::WeightedQuickUnion`].

use std::fmt;

use tracing::instrument;

use crate::{
    QuickFind, QuickUnion, WeightedQuickUnion,
    error::Result,
    union_find::UnionFind,
};

/// The disjoint-set implementation a [`UnionFindBuilder`] constructs.
///
/// # Examples
/// ```
/// use disjoint_core::Strategy;
///
/// assert_eq!(Strategy::default(), Strategy::WeightedQuickUnion);
/// assert_eq!(Strategy::QuickFind.as_str(), "quick_find");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Strategy {
    /// Direct component labels: constant-time `connected`, linear `union`.
    QuickFind,
    /// Unbalanced parent-pointer forest.
    QuickUnion,
    /// Size-balanced parent-pointer forest with logarithmic depth.
    #[default]
    WeightedQuickUnion,
}

impl Strategy {
    /// Every available strategy, cheapest `connected` first.
    pub const ALL: [Self; 3] = [Self::QuickFind, Self::QuickUnion, Self::WeightedQuickUnion];

    /// Returns the identifier used in logs and benchmark names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QuickFind => "quick_find",
            Self::QuickUnion => "quick_union",
            Self::WeightedQuickUnion => "weighted_quick_union",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configures and constructs [`DisjointSet`] instances.
///
/// # Examples
/// ```
/// use disjoint_core::{Strategy, UnionFind, UnionFindBuilder};
///
/// let mut sets = UnionFindBuilder::new()
///     .with_len(10)
///     .with_strategy(Strategy::QuickFind)
///     .build();
/// sets.union(4, 3)?;
/// assert!(sets.connected(3, 4)?);
/// assert_eq!(sets.strategy(), Strategy::QuickFind);
/// # Ok::<(), disjoint_core::UnionFindError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnionFindBuilder {
    len: usize,
    strategy: Strategy,
}

impl UnionFindBuilder {
    /// Creates a builder for an empty universe using the default strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of elements in the universe.
    #[must_use]
    pub const fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    /// Returns the configured universe size.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.len }

    /// Sets the strategy to construct.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured strategy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn strategy(&self) -> Strategy { self.strategy }

    /// Constructs `len` singleton components with the configured strategy.
    #[must_use]
    #[instrument(name = "build", level = "debug", skip(self), fields(len = self.len, strategy = %self.strategy))]
    pub fn build(&self) -> DisjointSet {
        match self.strategy {
            Strategy::QuickFind => DisjointSet::QuickFind(QuickFind::new(self.len)),
            Strategy::QuickUnion => DisjointSet::QuickUnion(QuickUnion::new(self.len)),
            Strategy::WeightedQuickUnion => {
                DisjointSet::WeightedQuickUnion(WeightedQuickUnion::new(self.len))
            }
        }
    }
}

/// A disjoint set whose strategy was chosen at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisjointSet {
    /// Backed by [`QuickFind`].
    QuickFind(QuickFind),
    /// Backed by [`QuickUnion`].
    QuickUnion(QuickUnion),
    /// Backed by [`WeightedQuickUnion`].
    WeightedQuickUnion(WeightedQuickUnion),
}

impl DisjointSet {
    /// Returns the strategy backing this set.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        match self {
            Self::QuickFind(_) => Strategy::QuickFind,
            Self::QuickUnion(_) => Strategy::QuickUnion,
            Self::WeightedQuickUnion(_) => Strategy::WeightedQuickUnion,
        }
    }

    /// Greatest root distance for forest-backed sets; `None` for quick-find,
    /// which keeps no trees.
    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        match self {
            Self::QuickFind(_) => None,
            Self::QuickUnion(inner) => Some(inner.max_depth()),
            Self::WeightedQuickUnion(inner) => Some(inner.max_depth()),
        }
    }
}

impl UnionFind for DisjointSet {
    fn len(&self) -> usize {
        match self {
            Self::QuickFind(inner) => inner.len(),
            Self::QuickUnion(inner) => inner.len(),
            Self::WeightedQuickUnion(inner) => inner.len(),
        }
    }

    fn count(&self) -> usize {
        match self {
            Self::QuickFind(inner) => inner.count(),
            Self::QuickUnion(inner) => inner.count(),
            Self::WeightedQuickUnion(inner) => inner.count(),
        }
    }

    fn connected(&self, p: usize, q: usize) -> Result<bool> {
        match self {
            Self::QuickFind(inner) => inner.connected(p, q),
            Self::QuickUnion(inner) => inner.connected(p, q),
            Self::WeightedQuickUnion(inner) => inner.connected(p, q),
        }
    }

    fn union(&mut self, p: usize, q: usize) -> Result<()> {
        match self {
            Self::QuickFind(inner) => inner.union(p, q),
            Self::QuickUnion(inner) => inner.union(p, q),
            Self::WeightedQuickUnion(inner) => inner.union(p, q),
        }
    }
}
