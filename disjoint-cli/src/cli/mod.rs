//! Command-line interface for replaying dynamic-connectivity input.
//!
//! The `connect` command reads a universe size followed by `p q` pairs,
//! unions every pair that is not yet connected, and reports those new
//! connections along with the final number of components.

mod commands;
mod input;

pub use commands::{
    Cli, CliError, Command, ConnectCommand, ConnectionSummary, StrategyArg, connect,
    render_summary, run_cli, run_cli_with_stdin,
};
pub use input::{ConnectionInput, parse_connections};
