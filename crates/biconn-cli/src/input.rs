//! Reading edge lists from a file or stdin.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use biconn_core::ParseError;
use biconn_core::edge_list::{DuplicatePolicy, EdgeList, parse_edge_list};
use tracing::warn;

use crate::output::{CliError, OutputMode, render_error};

/// Read an edge list from `path`, or from stdin when `path` is `None` or `-`.
///
/// # Errors
///
/// Returns a [`ParseError`] if the input cannot be read or parsed.
pub fn read_edge_list(path: Option<&Path>, policy: DuplicatePolicy) -> Result<EdgeList, ParseError> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)?;
            parse_edge_list(BufReader::new(file), policy)
        }
        _ => parse_edge_list(io::stdin().lock(), policy),
    }
}

/// Read an edge list, rendering parse failures as structured CLI errors.
///
/// # Errors
///
/// Returns an error after rendering if the input cannot be read or parsed.
pub fn load_edge_list(
    path: Option<&Path>,
    policy: DuplicatePolicy,
    output: OutputMode,
) -> anyhow::Result<EdgeList> {
    match read_edge_list(path, policy) {
        Ok(list) => {
            if list.duplicates > 0 {
                warn!(count = list.duplicates, "duplicate edges discarded");
            }
            Ok(list)
        }
        Err(err) => fail(output, &err),
    }
}

/// Render `err` to stderr and turn it into an `anyhow` error.
///
/// # Errors
///
/// Always returns an error.
pub fn fail<T>(output: OutputMode, err: &ParseError) -> anyhow::Result<T> {
    render_error(output, &CliError::from(err))?;
    anyhow::bail!("{}", err.code())
}
