//! Cross-strategy equivalence with the reachability oracle.
//!
//! Applies the same script to every strategy and verifies that each answers
//! `connected` exactly like the oracle for every pair, and reports the
//! oracle's component count.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DisjointSet, Strategy, UnionFind, UnionFindBuilder};

use super::oracle::ReachabilityOracle;
use super::types::UnionScript;

/// Builds a set with `strategy` and applies every union in `script`.
pub(super) fn apply_script(
    strategy: Strategy,
    script: &UnionScript,
) -> Result<DisjointSet, TestCaseError> {
    let mut sets = UnionFindBuilder::new()
        .with_len(script.len)
        .with_strategy(strategy)
        .build();
    for &(p, q) in &script.unions {
        sets.union(p, q).map_err(|err| {
            TestCaseError::fail(format!(
                "union({p}, {q}) failed: {err} (strategy={strategy}, shape={:?}, len={})",
                script.shape, script.len,
            ))
        })?;
    }
    Ok(sets)
}

/// Reads `connected(p, q)` and converts errors into test failures.
pub(super) fn query(sets: &DisjointSet, p: usize, q: usize) -> Result<bool, TestCaseError> {
    sets.connected(p, q).map_err(|err| {
        TestCaseError::fail(format!(
            "connected({p}, {q}) failed: {err} (strategy={})",
            sets.strategy(),
        ))
    })
}

/// Runs the oracle equivalence property for the given script.
pub(super) fn run_oracle_equivalence_property(script: &UnionScript) -> TestCaseResult {
    let oracle = ReachabilityOracle::new(script.len, &script.unions);

    for strategy in Strategy::ALL {
        let sets = apply_script(strategy, script)?;

        if sets.count() != oracle.count() {
            return Err(TestCaseError::fail(format!(
                "component count mismatch: {strategy}={}, oracle={} (shape={:?}, len={})",
                sets.count(),
                oracle.count(),
                script.shape,
                script.len,
            )));
        }

        for p in 0..script.len {
            for q in 0..script.len {
                let actual = query(&sets, p, q)?;
                let expected = oracle.connected(p, q);
                if actual != expected {
                    return Err(TestCaseError::fail(format!(
                        "connected({p}, {q}) mismatch: {strategy}={actual}, oracle={expected} \
                         (shape={:?}, len={}, unions={})",
                        script.shape,
                        script.len,
                        script.unions.len(),
                    )));
                }
            }
        }
    }

    Ok(())
}
