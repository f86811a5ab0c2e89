//! Line-oriented edge list input.
//!
//! # Format
//!
//! ```text
//! # comment
//! s            <- first single-token line: source query node
//! t            <- second single-token line: target query node
//! s a          <- two tokens: an undirected edge
//! a t
//! ```
//!
//! Blank lines are skipped. Tokens are separated by any whitespace. A line
//! with three or more tokens, or a third query node, is an error.

use std::io::BufRead;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{ParseError, QueryRole};
use crate::graph::store::{EdgeInsertion, GraphStore};

/// What to do when an edge repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Discard the repeat and log a warning.
    #[default]
    Warn,
    /// Fail with [`ParseError::DuplicateEdge`].
    Error,
}

/// A parsed edge list: the graph plus the optional query nodes.
#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    pub store: GraphStore<String>,
    pub source: Option<String>,
    pub target: Option<String>,
    /// Repeated edges discarded under [`DuplicatePolicy::Warn`].
    pub duplicates: usize,
}

impl EdgeList {
    /// Both query nodes.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingQueryNode`] naming the first one absent.
    pub fn query(&self) -> Result<(&str, &str), ParseError> {
        let source = self.source.as_deref().ok_or(ParseError::MissingQueryNode {
            role: QueryRole::Source,
        })?;
        let target = self.target.as_deref().ok_or(ParseError::MissingQueryNode {
            role: QueryRole::Target,
        })?;
        Ok((source, target))
    }
}

/// Parse an edge list from any buffered reader.
///
/// # Errors
///
/// Returns a [`ParseError`] for unreadable input, malformed lines,
/// self-loops, a third query node, or repeated edges under
/// [`DuplicatePolicy::Error`].
#[instrument(skip(reader))]
pub fn parse_edge_list<R: BufRead>(
    reader: R,
    policy: DuplicatePolicy,
) -> Result<EdgeList, ParseError> {
    let mut list = EdgeList::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut tokens = trimmed.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(node), None, None) => list.set_query_node(line_no, node)?,
            (Some(u), Some(v), None) => list.add_edge(line_no, u, v, policy)?,
            _ => {
                return Err(ParseError::MalformedLine {
                    line: line_no,
                    content: line.clone(),
                });
            }
        }
    }

    debug!(
        nodes = list.store.node_count(),
        edges = list.store.edge_count(),
        duplicates = list.duplicates,
        has_source = list.source.is_some(),
        has_target = list.target.is_some(),
        "edge list parsed"
    );
    Ok(list)
}

/// Parse an edge list held in memory.
///
/// # Errors
///
/// See [`parse_edge_list`].
pub fn parse_str(input: &str, policy: DuplicatePolicy) -> Result<EdgeList, ParseError> {
    parse_edge_list(input.as_bytes(), policy)
}

impl EdgeList {
    fn set_query_node(&mut self, line: usize, node: &str) -> Result<(), ParseError> {
        if self.source.is_none() {
            self.source = Some(node.to_string());
        } else if self.target.is_none() {
            self.target = Some(node.to_string());
        } else {
            return Err(ParseError::ExtraQueryNode {
                line,
                node: node.to_string(),
            });
        }
        Ok(())
    }

    fn add_edge(
        &mut self,
        line: usize,
        u: &str,
        v: &str,
        policy: DuplicatePolicy,
    ) -> Result<(), ParseError> {
        let inserted = self
            .store
            .add_edge(u.to_string(), v.to_string())
            .map_err(|source| ParseError::InvalidEdge { line, source })?;

        if inserted == EdgeInsertion::Duplicate {
            if policy == DuplicatePolicy::Error {
                return Err(ParseError::DuplicateEdge {
                    line,
                    u: u.to_string(),
                    v: v.to_string(),
                });
            }
            self.duplicates += 1;
        }
        Ok(())
    }
}
