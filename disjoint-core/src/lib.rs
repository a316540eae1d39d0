//! Disjoint-set (union-find) data structures.
//!
//! Three interchangeable strategies partition a fixed universe of `N`
//! elements, identified by the indices `0..N`, into disjoint components:
//!
//! - [`QuickFind`] labels every element with its component id. `connected`
//!   is a single comparison; `union` relabels the whole array.
//! - [`QuickUnion`] stores a parent-pointer forest. Both operations chase
//!   parent links to a root, so their cost is the depth of the trees, which
//!   is unbounded.
//! - [`WeightedQuickUnion`] balances the forest by attaching the smaller
//!   tree under the larger root, bounding depth by `log2(N)`.
//!
//! Every strategy implements the [`UnionFind`] trait. [`UnionFindBuilder`]
//! selects a strategy at runtime and yields a [`DisjointSet`] that dispatches
//! statically to it.
//!
//! # Examples
//! ```
//! use disjoint_core::WeightedQuickUnion;
//!
//! let mut sets = WeightedQuickUnion::new(4);
//! sets.union(0, 1)?;
//! sets.union(2, 3)?;
//! assert!(sets.connected(1, 0)?);
//! assert!(!sets.connected(1, 2)?);
//! assert_eq!(sets.count(), 2);
//! # Ok::<(), disjoint_core::UnionFindError>(())
//! ```

mod builder;
mod error;
mod forest;
mod quick_find;
mod quick_union;
mod union_find;
mod weighted;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{DisjointSet, Strategy, UnionFindBuilder},
    error::{Result, UnionFindError, UnionFindErrorCode},
    quick_find::QuickFind,
    quick_union::QuickUnion,
    union_find::UnionFind,
    weighted::WeightedQuickUnion,
};
