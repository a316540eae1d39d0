//! The contract shared by every disjoint-set strategy.

use tracing::debug;

use crate::error::{Result, UnionFindError};

/// Dynamic connectivity over a fixed universe of elements `0..len()`.
///
/// Implementations never disconnect elements: once `connected(p, q)` holds it
/// keeps holding for every later call. Indices are validated before any state
/// is read or written, so a failed call leaves the structure unchanged.
///
/// The trait carries no internal synchronisation. Sharing an instance across
/// threads requires wrapping it in a lock.
pub trait UnionFind {
    /// Number of elements in the universe.
    fn len(&self) -> usize;

    /// Returns `true` when the universe contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current number of components.
    fn count(&self) -> usize;

    /// Returns whether `p` and `q` belong to the same component.
    ///
    /// # Errors
    /// Returns [`UnionFindError::IndexOutOfRange`] when either index is not
    /// below [`len`](Self::len). `p` is checked first.
    fn connected(&self, p: usize, q: usize) -> Result<bool>;

    /// Merges the components containing `p` and `q`.
    ///
    /// Merging two elements that are already connected leaves the
    /// connectivity relation unchanged.
    ///
    /// # Errors
    /// Returns [`UnionFindError::IndexOutOfRange`] when either index is not
    /// below [`len`](Self::len). `p` is checked first.
    fn union(&mut self, p: usize, q: usize) -> Result<()>;
}

/// Builds the out-of-range error for `index` and records it.
pub(crate) fn out_of_range(index: usize, len: usize) -> UnionFindError {
    let error = UnionFindError::IndexOutOfRange { index, len };
    debug!(index, len, code = %error.code(), "rejected element index");
    error
}

/// Confirms `index` addresses an element of a universe of `len` elements.
pub(crate) fn check_index(index: usize, len: usize) -> Result<usize> {
    if index < len {
        Ok(index)
    } else {
        Err(out_of_range(index, len))
    }
}
