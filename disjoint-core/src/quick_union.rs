//! Quick-union: an unbalanced parent-pointer forest.
//!
//! `union` attaches the root of `p`'s tree under the root of `q`'s tree.
//! Nothing limits tree height, so a chain of unions can produce a single
//! path of length `N` and make every root chase linear.

use tracing::{debug, trace};

use crate::{builder::Strategy, error::Result, forest, union_find::UnionFind};

/// Parent-pointer disjoint set without balancing or path compression.
///
/// # Examples
/// ```
/// use disjoint_core::QuickUnion;
///
/// let mut sets = QuickUnion::new(3);
/// sets.union(0, 1)?;
/// sets.union(1, 2)?;
/// assert_eq!(sets.find(0)?, 2);
/// assert_eq!(sets.max_depth(), 2);
/// # Ok::<(), disjoint_core::UnionFindError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickUnion {
    parent: Vec<usize>,
    count: usize,
}

impl QuickUnion {
    /// Creates `len` singleton trees, each element its own root.
    #[must_use]
    pub fn new(len: usize) -> Self {
        debug!(len, strategy = %Strategy::QuickUnion, "initialised union-find");
        Self {
            parent: (0..len).collect(),
            count: len,
        }
    }

    /// Number of elements in the universe.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the universe contains no elements.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Current number of components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn count(&self) -> usize { self.count }

    /// Returns the root of the tree containing `p`.
    ///
    /// # Errors
    /// Returns [`crate::UnionFindError::IndexOutOfRange`] for an index outside
    /// the universe.
    pub fn find(&self, p: usize) -> Result<usize> {
        forest::checked_root(&self.parent, p)
    }

    /// Returns whether `p` and `q` chase to the same root.
    ///
    /// # Errors
    /// Returns [`crate::UnionFindError::IndexOutOfRange`] for an index outside
    /// the universe.
    pub fn connected(&self, p: usize, q: usize) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Points the root of `p` at the root of `q`.
    ///
    /// When both share a root the write is a self-loop and changes nothing.
    ///
    /// # Errors
    /// Returns [`crate::UnionFindError::IndexOutOfRange`] for an index outside
    /// the universe.
    pub fn union(&mut self, p: usize, q: usize) -> Result<()> {
        let i = self.find(p)?;
        let j = self.find(q)?;
        self.parent[i] = j;
        if i != j {
            self.count -= 1;
            trace!(p, q, root = j, components = self.count, "merged components");
        }
        Ok(())
    }

    /// Greatest number of parent links between any element and its root.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        forest::max_depth(&self.parent)
    }
}

impl UnionFind for QuickUnion {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn count(&self) -> usize {
        Self::count(self)
    }

    fn connected(&self, p: usize, q: usize) -> Result<bool> {
        Self::connected(self, p, q)
    }

    fn union(&mut self, p: usize, q: usize) -> Result<()> {
        Self::union(self, p, q)
    }
}
