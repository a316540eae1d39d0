//! Strategy builders for union-find property tests.
//!
//! Scripts are produced from a seeded [`SmallRng`] so that rstest cases can
//! replay a specific shape and seed without going through proptest.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{ScriptShape, UnionScript};

/// Largest universe generated; the transitivity law is cubic in it.
const MAX_LEN: usize = 32;
/// Upper bound on the number of unions in one script.
const MAX_UNIONS: usize = 64;

/// Generates union scripts across every [`ScriptShape`].
pub(super) fn union_script_strategy() -> impl Strategy<Value = UnionScript> {
    (any::<ScriptShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_script(shape, &mut rng)
    })
}

/// Generates a script for a specific shape.
pub(super) fn generate_script(shape: ScriptShape, rng: &mut SmallRng) -> UnionScript {
    let len = rng.gen_range(0..=MAX_LEN);
    let unions = if len == 0 {
        Vec::new()
    } else {
        match shape {
            ScriptShape::Uniform => uniform_unions(len, rng),
            ScriptShape::Chain => chain_unions(len),
            ScriptShape::Clustered => clustered_unions(len, rng),
            ScriptShape::Repeated => uniform_unions(len, rng)
                .into_iter()
                .flat_map(|pair| [pair, pair])
                .collect(),
        }
    };
    UnionScript { len, unions, shape }
}

fn uniform_unions(len: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let count = rng.gen_range(0..=MAX_UNIONS);
    (0..count)
        .map(|_| (rng.gen_range(0..len), rng.gen_range(0..len)))
        .collect()
}

fn chain_unions(len: usize) -> Vec<(usize, usize)> {
    (1..len).map(|node| (node - 1, node)).collect()
}

/// Splits the universe into contiguous blocks and only unions within them.
fn clustered_unions(len: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let block = rng.gen_range(1..=len.min(8));
    let count = rng.gen_range(0..=MAX_UNIONS);
    (0..count)
        .map(|_| {
            let start = rng.gen_range(0..len) / block * block;
            let end = (start + block).min(len);
            (rng.gen_range(start..end), rng.gen_range(start..end))
        })
        .collect()
}
