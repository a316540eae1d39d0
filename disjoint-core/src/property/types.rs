//! Type definitions for union-find property tests.

use test_strategy::Arbitrary;

/// Shape of the union sequence produced by the script generators.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum ScriptShape {
    /// Pairs drawn uniformly from the whole universe.
    #[weight(3)]
    Uniform,
    /// Each union links the next element onto the previous one, the worst
    /// case for unbalanced forests.
    #[weight(2)]
    Chain,
    /// Unions confined to a few disjoint blocks, leaving several components.
    #[weight(2)]
    Clustered,
    /// Uniform pairs where every union is issued twice in a row.
    #[weight(1)]
    Repeated,
}

/// A universe size plus the unions applied to it, in order.
#[derive(Clone, Debug)]
pub(super) struct UnionScript {
    /// Number of elements in the universe.
    pub len: usize,
    /// Union operations; every index is below `len`.
    pub unions: Vec<(usize, usize)>,
    /// Generator that produced the script.
    pub shape: ScriptShape,
}
