//! Error types for the disjoint-set structures.
//!
//! Every operation validates its element indices before touching any state,
//! so the only failure mode is an index outside the universe.

use thiserror::Error;

/// Errors returned by [`crate::UnionFind`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum UnionFindError {
    /// An element index fell outside `0..len`.
    #[error("index {index} is out of range for a universe of {len} elements")]
    IndexOutOfRange {
        /// The rejected element index.
        index: usize,
        /// Number of elements in the universe.
        len: usize,
    },
}

impl UnionFindError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> UnionFindErrorCode {
        match self {
            Self::IndexOutOfRange { .. } => UnionFindErrorCode::IndexOutOfRange,
        }
    }
}

/// Machine-readable error codes for [`UnionFindError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum UnionFindErrorCode {
    /// An element index fell outside the universe.
    IndexOutOfRange,
}

impl UnionFindErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IndexOutOfRange => "UNION_FIND_INDEX_OUT_OF_RANGE",
        }
    }
}

impl std::fmt::Display for UnionFindErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convenient alias for results returned by the union-find API.
pub type Result<T> = core::result::Result<T, UnionFindError>;
