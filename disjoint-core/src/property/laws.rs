//! Laws every dynamic-connectivity structure obeys.
//!
//! - **Equivalence**: `connected` is reflexive, symmetric and transitive
//!   after every union.
//! - **Monotonicity**: a union never disconnects a pair.
//! - **Idempotence**: issuing each union twice changes nothing.
//! - **Height bound**: weighted forests stay within `floor(log2 N) + 1`.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DisjointSet, Strategy, UnionFind, UnionFindBuilder, WeightedQuickUnion};

use super::equivalence::{apply_script, query};
use super::types::UnionScript;

/// Row-major `connected` answers for every ordered pair.
fn connectivity_matrix(sets: &DisjointSet) -> Result<Vec<bool>, TestCaseError> {
    let len = sets.len();
    let mut matrix = Vec::with_capacity(len * len);
    for p in 0..len {
        for q in 0..len {
            matrix.push(query(sets, p, q)?);
        }
    }
    Ok(matrix)
}

/// Describes the first equivalence law broken by a `len * len` row-major
/// `connected` matrix, if any.
///
/// Given symmetry, transitivity holds exactly when connected elements share
/// the same row, so rows are compared instead of scanning every triple.
pub(super) fn equivalence_violation(matrix: &[bool], len: usize) -> Option<String> {
    let row = |p: usize| &matrix[p * len..(p + 1) * len];
    for p in 0..len {
        if !row(p)[p] {
            return Some(format!("connected({p}, {p}) is false"));
        }
        for q in 0..len {
            if row(p)[q] != row(q)[p] {
                return Some(format!("connected({p}, {q}) != connected({q}, {p})"));
            }
            if !row(p)[q] || row(p) == row(q) {
                continue;
            }
            let r = (0..len).find(|&r| row(p)[r] != row(q)[r]).unwrap_or(q);
            let (a, b) = if row(q)[r] { (p, q) } else { (q, p) };
            return Some(format!("{a}~{b} and {b}~{r} but not {a}~{r}"));
        }
    }
    None
}

/// Verifies reflexivity, symmetry and transitivity before the first union
/// and after every union of the script.
pub(super) fn run_equivalence_laws_property(script: &UnionScript) -> TestCaseResult {
    for strategy in Strategy::ALL {
        let mut sets = UnionFindBuilder::new()
            .with_len(script.len)
            .with_strategy(strategy)
            .build();
        check_equivalence(strategy, &sets, "initially")?;

        for (step, &(p, q)) in script.unions.iter().enumerate() {
            sets.union(p, q)
                .map_err(|err| TestCaseError::fail(format!("union({p}, {q}) failed: {err}")))?;
            check_equivalence(strategy, &sets, &format!("after step {step} union({p}, {q})"))?;
        }
    }
    Ok(())
}

fn check_equivalence(strategy: Strategy, sets: &DisjointSet, when: &str) -> TestCaseResult {
    let matrix = connectivity_matrix(sets)?;
    match equivalence_violation(&matrix, sets.len()) {
        Some(violation) => Err(TestCaseError::fail(format!("{strategy}: {when}: {violation}"))),
        None => Ok(()),
    }
}

/// Verifies that every union keeps earlier connections and links its pair.
pub(super) fn run_monotonicity_property(script: &UnionScript) -> TestCaseResult {
    for strategy in Strategy::ALL {
        let mut sets = UnionFindBuilder::new()
            .with_len(script.len)
            .with_strategy(strategy)
            .build();
        let mut before = connectivity_matrix(&sets)?;

        for (step, &(p, q)) in script.unions.iter().enumerate() {
            sets.union(p, q)
                .map_err(|err| TestCaseError::fail(format!("union({p}, {q}) failed: {err}")))?;
            if !query(&sets, p, q)? {
                return Err(TestCaseError::fail(format!(
                    "{strategy}: step {step} union({p}, {q}) left the pair disconnected"
                )));
            }
            let after = connectivity_matrix(&sets)?;
            if let Some(lost) = before
                .iter()
                .zip(&after)
                .position(|(&was, &is)| was && !is)
            {
                return Err(TestCaseError::fail(format!(
                    "{strategy}: step {step} union({p}, {q}) disconnected pair ({}, {})",
                    lost / script.len,
                    lost % script.len,
                )));
            }
            before = after;
        }
    }
    Ok(())
}

/// Verifies that doubling every union yields the same relation and count.
pub(super) fn run_idempotence_property(script: &UnionScript) -> TestCaseResult {
    let doubled = UnionScript {
        unions: script
            .unions
            .iter()
            .flat_map(|&pair| [pair, pair])
            .collect(),
        ..script.clone()
    };

    for strategy in Strategy::ALL {
        let once = apply_script(strategy, script)?;
        let twice = apply_script(strategy, &doubled)?;
        if once.count() != twice.count() {
            return Err(TestCaseError::fail(format!(
                "{strategy}: doubled unions changed count from {} to {}",
                once.count(),
                twice.count(),
            )));
        }
        if connectivity_matrix(&once)? != connectivity_matrix(&twice)? {
            return Err(TestCaseError::fail(format!(
                "{strategy}: doubled unions changed connectivity (shape={:?}, len={})",
                script.shape, script.len,
            )));
        }
    }
    Ok(())
}

/// Verifies the weighted forest never exceeds `floor(log2 N) + 1` links.
pub(super) fn run_height_bound_property(script: &UnionScript) -> TestCaseResult {
    let mut sets = WeightedQuickUnion::new(script.len);
    for &(p, q) in &script.unions {
        sets.union(p, q)
            .map_err(|err| TestCaseError::fail(format!("union({p}, {q}) failed: {err}")))?;
    }

    let Some(log) = script.len.checked_ilog2() else {
        return Ok(());
    };
    let bound = usize::try_from(log).unwrap_or(usize::MAX).saturating_add(1);
    let depth = sets.max_depth();
    if depth > bound {
        return Err(TestCaseError::fail(format!(
            "weighted depth {depth} exceeds bound {bound} (shape={:?}, len={})",
            script.shape, script.len,
        )));
    }
    Ok(())
}
