//! Parsing of whitespace-separated connection lists.
//!
//! The first token is the universe size `N`; every following pair of tokens
//! is one connection. Line breaks carry no meaning.

use std::io::Read;

use super::CliError;

/// A universe size and the connections to replay over it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConnectionInput {
    /// Number of elements in the universe.
    pub len: usize,
    /// Connections in input order. Indices are not yet range-checked.
    pub pairs: Vec<(usize, usize)>,
}

/// Reads and tokenises a complete connection list from `reader`.
///
/// # Errors
/// Returns [`CliError::Read`] when the reader fails or yields invalid UTF-8,
/// [`CliError::MissingUniverseSize`] for empty input,
/// [`CliError::InvalidToken`] for a token that is not an unsigned integer,
/// and [`CliError::DanglingIndex`] when the final pair lacks its second
/// element.
///
/// # Examples
/// ```
/// use disjoint_cli::cli::parse_connections;
///
/// let input = parse_connections("3\n0 1\n1 2\n".as_bytes())?;
/// assert_eq!(input.len, 3);
/// assert_eq!(input.pairs, vec![(0, 1), (1, 2)]);
/// # Ok::<(), disjoint_cli::cli::CliError>(())
/// ```
pub fn parse_connections(mut reader: impl Read) -> Result<ConnectionInput, CliError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| CliError::Read { source })?;

    let mut tokens = text
        .split_whitespace()
        .enumerate()
        .map(|(offset, token)| parse_token(offset + 1, token));

    let len = tokens.next().ok_or(CliError::MissingUniverseSize)??;
    let mut pairs = Vec::new();
    while let Some(first) = tokens.next() {
        let p = first?;
        let q = tokens
            .next()
            .ok_or(CliError::DanglingIndex { index: p })??;
        pairs.push((p, q));
    }

    Ok(ConnectionInput { len, pairs })
}

fn parse_token(position: usize, token: &str) -> Result<usize, CliError> {
    token.parse().map_err(|_| CliError::InvalidToken {
        position,
        token: token.to_owned(),
    })
}
