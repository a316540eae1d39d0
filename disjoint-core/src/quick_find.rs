//! Quick-find: every element stores its component label directly.
//!
//! `connected` compares two labels in constant time. `union` rewrites every
//! label of one component, scanning the entire array once per call.

use tracing::{debug, trace};

use crate::{
    builder::Strategy,
    error::Result,
    union_find::{UnionFind, out_of_range},
};

/// Array-of-labels disjoint set with `O(1)` find and `O(N)` union.
///
/// Two elements share a component exactly when their labels are equal.
///
/// # Examples
/// ```
/// use disjoint_core::QuickFind;
///
/// let mut sets = QuickFind::new(3);
/// sets.union(0, 2)?;
/// assert!(sets.connected(2, 0)?);
/// assert!(!sets.connected(0, 1)?);
/// # Ok::<(), disjoint_core::UnionFindError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickFind {
    label: Vec<usize>,
    count: usize,
}

impl QuickFind {
    /// Creates `len` singleton components labelled by their own index.
    #[must_use]
    pub fn new(len: usize) -> Self {
        debug!(len, strategy = %Strategy::QuickFind, "initialised union-find");
        Self {
            label: (0..len).collect(),
            count: len,
        }
    }

    /// Number of elements in the universe.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.label.len() }

    /// Returns `true` when the universe contains no elements.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_empty(&self) -> bool { self.label.is_empty() }

    /// Current number of components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn count(&self) -> usize { self.count }

    /// Returns whether `p` and `q` carry the same label.
    ///
    /// # Errors
    /// Returns [`crate::UnionFindError::IndexOutOfRange`] for an index outside
    /// the universe.
    pub fn connected(&self, p: usize, q: usize) -> Result<bool> {
        Ok(self.label(p)? == self.label(q)?)
    }

    /// Relabels every member of `p`'s component with `q`'s label.
    ///
    /// The full scan runs even when both elements already share a label.
    ///
    /// # Errors
    /// Returns [`crate::UnionFindError::IndexOutOfRange`] for an index outside
    /// the universe.
    pub fn union(&mut self, p: usize, q: usize) -> Result<()> {
        let pid = self.label(p)?;
        let qid = self.label(q)?;
        for label in &mut self.label {
            if *label == pid {
                *label = qid;
            }
        }
        if pid != qid {
            self.count -= 1;
            trace!(p, q, root = qid, components = self.count, "merged components");
        }
        Ok(())
    }

    fn label(&self, index: usize) -> Result<usize> {
        self.label
            .get(index)
            .copied()
            .ok_or_else(|| out_of_range(index, self.len()))
    }
}

impl UnionFind for QuickFind {
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
