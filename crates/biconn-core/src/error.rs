//! Error types for graph construction, traversal, queries and input parsing.
//!
//! Node identifiers are generic, so errors carry their `Debug` rendering
//! rather than the node value itself.

use std::fmt;

/// Errors raised by the graph store and the biconnectivity engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A self-loop `(v, v)` was offered to the store.
    #[error("invalid edge: self-loop on node {node}")]
    InvalidEdge { node: String },

    /// A traversal root or query node is not present in the store.
    #[error("node not found in graph: {node}")]
    UnknownNode { node: String },
}

impl GraphError {
    pub(crate) fn invalid_edge(node: &impl fmt::Debug) -> Self {
        Self::InvalidEdge {
            node: format!("{node:?}"),
        }
    }

    pub(crate) fn unknown_node(node: &impl fmt::Debug) -> Self {
        Self::UnknownNode {
            node: format!("{node:?}"),
        }
    }
}

/// Errors raised by [`crate::path::PathFilter`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The analysis handed to the filter never visited this query node, so
    /// its component boundaries are unknown.
    #[error("node {node} was not visited by the biconnectivity traversal")]
    NotTraversed { node: String },
}

/// Which of the two query nodes a parse error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryRole {
    Source,
    Target,
}

impl fmt::Display for QueryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Errors from the line-oriented edge list format.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A line with more than two whitespace-separated tokens.
    #[error("line {line}: expected one node or two nodes, got {content:?}")]
    MalformedLine { line: usize, content: String },

    /// A third single-token line after source and target were set.
    #[error("line {line}: unexpected query node {node:?}, source and target are already set")]
    ExtraQueryNode { line: usize, node: String },

    /// A query was required but the input named fewer than two query nodes.
    #[error("missing {role} query node")]
    MissingQueryNode { role: QueryRole },

    /// The store rejected an edge.
    #[error("line {line}: {source}")]
    InvalidEdge {
        line: usize,
        #[source]
        source: GraphError,
    },

    /// An edge repeated under the strict duplicate policy.
    #[error("line {line}: duplicate edge {u} -- {v}")]
    DuplicateEdge { line: usize, u: String, v: String },

    /// Reading the input failed.
    #[error("failed to read edge list: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Stable machine-readable code for CLI error rendering.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedLine { .. } => "malformed_line",
            Self::ExtraQueryNode { .. } => "extra_query_node",
            Self::MissingQueryNode { .. } => "missing_query_node",
            Self::InvalidEdge { .. } => "invalid_edge",
            Self::DuplicateEdge { .. } => "duplicate_edge",
            Self::Io(_) => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_error_messages_carry_debug_form() {
        let err = GraphError::invalid_edge(&"a");
        assert_eq!(err.to_string(), "invalid edge: self-loop on node \"a\"");

        let err = GraphError::unknown_node(&7_u32);
        assert_eq!(err.to_string(), "node not found in graph: 7");
    }

    #[test]
    fn parse_error_codes_are_unique() {
        let codes = [
            ParseError::MalformedLine {
                line: 1,
                content: String::new(),
            }
            .code(),
            ParseError::ExtraQueryNode {
                line: 1,
                node: String::new(),
            }
            .code(),
            ParseError::MissingQueryNode {
                role: QueryRole::Source,
            }
            .code(),
            ParseError::InvalidEdge {
                line: 1,
                source: GraphError::invalid_edge(&"x"),
            }
            .code(),
            ParseError::DuplicateEdge {
                line: 1,
                u: String::new(),
                v: String::new(),
            }
            .code(),
            ParseError::Io(std::io::Error::other("boom")).code(),
        ];
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn missing_query_node_names_role() {
        let err = ParseError::MissingQueryNode {
            role: QueryRole::Target,
        };
        assert_eq!(err.to_string(), "missing target query node");
    }
}
