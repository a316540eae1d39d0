//! Property-based tests shared by every union-find strategy.
//!
//! Generates union scripts over small universes and checks each strategy
//! against a reachability oracle and against the equivalence-relation laws
//! that dynamic connectivity must obey.

mod equivalence;
mod laws;
mod oracle;
mod strategies;
mod types;
