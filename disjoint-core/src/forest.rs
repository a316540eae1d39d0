//! Parent-pointer forest helpers shared by the quick-union strategies.
//!
//! A forest is a flat slice where `parent[i]` names the parent of `i` and a
//! root satisfies `parent[i] == i`. No path compression is ever applied.

use crate::{error::Result, union_find::check_index};

/// Follows parent links from `node` until reaching a self-loop.
///
/// `node` must be in bounds.
pub(crate) fn root(parent: &[usize], mut node: usize) -> usize {
    while parent[node] != node {
        node = parent[node];
    }
    node
}

/// Validates `index` and returns its root.
pub(crate) fn checked_root(parent: &[usize], index: usize) -> Result<usize> {
    check_index(index, parent.len()).map(|node| root(parent, node))
}

/// Number of parent links between `node` and its root.
pub(crate) fn depth(parent: &[usize], mut node: usize) -> usize {
    let mut links = 0;
    while parent[node] != node {
        node = parent[node];
        links += 1;
    }
    links
}

/// Greatest depth of any element in the forest; zero when it is empty.
///
/// Walks every element to its root, so the cost is `O(N * depth)`.
pub(crate) fn max_depth(parent: &[usize]) -> usize {
    (0..parent.len())
        .map(|node| depth(parent, node))
        .max()
        .unwrap_or(0)
}
