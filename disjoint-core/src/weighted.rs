//! Weighted quick-union: a parent-pointer forest balanced by tree size.
//!
//! Each root records how many elements its tree holds. `union` hangs the
//! smaller tree under the larger root, so a tree only gets deeper when its
//! size at least doubles. Depth therefore never exceeds `log2(N)`.
//!
//! `size[r]` is only meaningful while `r` is a root. Entries of attached
//! nodes go stale and are never read.

use tracing::{debug, trace};

use crate::{builder::Strategy, error::Result, forest, union_find::UnionFind};

/// Size-balanced parent-pointer disjoint set without path compression.
///
/// # Examples
/// ```
/// use disjoint_core::WeightedQuickUnion;
///
/// let mut sets = WeightedQuickUnion::new(4);
/// sets.union(0, 1)?;
/// sets.union(2, 0)?;
/// assert_eq!(sets.find(2)?, 0);
/// assert_eq!(sets.component_size(1)?, 3);
/// # Ok::<(), disjoint_core::UnionFindError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightedQuickUnion {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl WeightedQuickUnion {
    /// Creates `len` singleton trees of size one.
    #[must_use]
    pub fn new(len: usize) -> Self {
        debug!(len, strategy = %Strategy::WeightedQuickUnion, "initialised union-find");
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
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

    /// Number of elements in the component containing `p`.
    ///
    /// # Errors
    /// Returns [`crate::UnionFindError::IndexOutOfRange`] for an index outside
    /// the universe.
    pub fn component_size(&self, p: usize) -> Result<usize> {
        self.find(p).map(|root| self.size[root])
    }

    /// Returns whether `p` and `q` chase to the same root.
    ///
    /// # Errors
    /// Returns [`crate::UnionFindError::IndexOutOfRange`] for an index outside
    /// the universe.
    pub fn connected(&self, p: usize, q: usize) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Merges the trees of `p` and `q`, keeping the larger root.
    ///
    /// On equal sizes the root of `p` survives. Connected elements are left
    /// alone without any write.
    ///
    /// # Errors
    /// Returns [`crate::UnionFindError::IndexOutOfRange`] for an index outside
    /// the universe.
    pub fn union(&mut self, p: usize, q: usize) -> Result<()> {
        let i = self.find(p)?;
        let j = self.find(q)?;
        if i == j {
            return Ok(());
        }

        let (root, child) = if self.size[i] < self.size[j] {
            (j, i)
        } else {
            (i, j)
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.count -= 1;
        trace!(
            p,
            q,
            root,
            size = self.size[root],
            components = self.count,
            "merged components"
        );
        Ok(())
    }

    /// Greatest number of parent links between any element and its root.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        forest::max_depth(&self.parent)
    }
}

impl UnionFind for WeightedQuickUnion {
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
