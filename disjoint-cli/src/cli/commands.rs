//! Command definitions and execution for the disjoint CLI.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use disjoint_core::{Strategy, UnionFind, UnionFindBuilder, UnionFindError, UnionFindErrorCode};
use thiserror::Error;
use tracing::{info, instrument};

use super::input::{ConnectionInput, parse_connections};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "disjoint",
    about = "Replay dynamic-connectivity input through a union-find strategy."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Union every pair that is not yet connected and print it.
    Connect(ConnectCommand),
}

/// Options accepted by the `connect` command.
#[derive(Debug, Args, Clone)]
pub struct ConnectCommand {
    /// Union-find strategy used to track components.
    #[arg(long, value_enum, default_value_t = StrategyArg::WeightedQuickUnion)]
    pub strategy: StrategyArg,

    /// Input file; reads stdin when omitted or `-`.
    pub path: Option<PathBuf>,
}

/// Strategy names accepted on the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum StrategyArg {
    /// Direct component labels.
    QuickFind,
    /// Unbalanced parent-pointer forest.
    QuickUnion,
    /// Size-balanced parent-pointer forest.
    WeightedQuickUnion,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::QuickFind => Self::QuickFind,
            StrategyArg::QuickUnion => Self::QuickUnion,
            StrategyArg::WeightedQuickUnion => Self::WeightedQuickUnion,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading the input stream failed.
    #[error("failed to read input: {source}")]
    Read {
        /// Underlying read failure.
        #[source]
        source: io::Error,
    },
    /// The input contained no tokens at all.
    #[error("input is empty; expected the number of elements first")]
    MissingUniverseSize,
    /// A token was not an unsigned integer.
    #[error("token {position} (`{token}`) is not an unsigned integer")]
    InvalidToken {
        /// One-based position of the token in the input.
        position: usize,
        /// The offending token.
        token: String,
    },
    /// The input ended after the first element of a pair.
    #[error("element {index} has no partner; connections come in pairs")]
    DanglingIndex {
        /// The unpaired element.
        index: usize,
    },
    /// A connection referenced an element outside the universe.
    #[error(transparent)]
    Core(#[from] UnionFindError),
}

impl CliError {
    /// Returns the core error code when the failure came from the union-find.
    #[must_use]
    pub const fn core_code(&self) -> Option<UnionFindErrorCode> {
        match self {
            Self::Core(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Outcome of replaying a connection list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConnectionSummary {
    /// Strategy used to track components.
    pub strategy: Strategy,
    /// Number of elements in the universe.
    pub len: usize,
    /// Pairs that joined two previously separate components, in input order.
    pub new_connections: Vec<(usize, usize)>,
    /// Components remaining after every pair was processed.
    pub components: usize,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing or replaying the input fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use disjoint_cli::cli::{Cli, Command, ConnectCommand, StrategyArg, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "4\n0 1\n1 0\n2 3\n")?;
/// let cli = Cli {
///     command: Command::Connect(ConnectCommand {
///         strategy: StrategyArg::QuickFind,
///         path: Some(file.path().to_path_buf()),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.new_connections, vec![(0, 1), (2, 3)]);
/// assert_eq!(summary.components, 2);
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<ConnectionSummary, CliError> {
    run_cli_with_stdin(cli, io::stdin().lock())
}

/// Executes `cli`, reading from `stdin` when the command names no input
/// file or names `-`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing or replaying the input fails.
pub fn run_cli_with_stdin(cli: Cli, stdin: impl Read) -> Result<ConnectionSummary, CliError> {
    match cli.command {
        Command::Connect(command) => run_connect(&command, stdin),
    }
}

fn run_connect(command: &ConnectCommand, stdin: impl Read) -> Result<ConnectionSummary, CliError> {
    let strategy = Strategy::from(command.strategy);
    let input = match command.path.as_deref() {
        Some(path) if path != Path::new("-") => parse_connections(open_input(path)?)?,
        _ => parse_connections(stdin)?,
    };
    connect(&input, strategy)
}

fn open_input(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Replays `input` through a fresh set built with `strategy`.
///
/// A pair is reported when its elements were in different components
/// before it was applied; already-connected pairs are skipped.
///
/// # Errors
/// Returns [`CliError::Core`] when a pair references an element outside
/// the universe.
#[instrument(skip_all, fields(len = input.len, pairs = input.pairs.len(), %strategy))]
pub fn connect(
    input: &ConnectionInput,
    strategy: Strategy,
) -> Result<ConnectionSummary, CliError> {
    let mut sets = UnionFindBuilder::new()
        .with_len(input.len)
        .with_strategy(strategy)
        .build();

    let mut new_connections = Vec::new();
    for &(p, q) in &input.pairs {
        if !sets.connected(p, q)? {
            sets.union(p, q)?;
            new_connections.push((p, q));
        }
    }

    info!(
        connections = new_connections.len(),
        components = sets.count(),
        "replayed connection list"
    );
    Ok(ConnectionSummary {
        strategy,
        len: input.len,
        new_connections,
        components: sets.count(),
    })
}

/// Renders `summary` to `writer`: one `p q` line per new connection followed
/// by the component count.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use disjoint_cli::cli::{ConnectionSummary, render_summary};
/// # use disjoint_core::Strategy;
/// let summary = ConnectionSummary {
///     strategy: Strategy::QuickUnion,
///     len: 3,
///     new_connections: vec![(0, 2)],
///     components: 2,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8_lossy(&buffer), "0 2\n2 components\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_summary(summary: &ConnectionSummary, mut writer: impl Write) -> io::Result<()> {
    for (p, q) in &summary.new_connections {
        writeln!(writer, "{p} {q}")?;
    }
    writeln!(writer, "{} components", summary.components)
}
