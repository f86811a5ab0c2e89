//! Nodes that can lie on some simple path between two query nodes.
//!
//! # Algorithm
//!
//! 1. BFS from `s` finds one shortest path to `t`. No path → [`PathOutcome::NoPathFound`].
//! 2. For each biconnected component, count the path nodes incident to it.
//! 3. Every component touched by two or more path nodes qualifies; all of
//!    its nodes go into the result.
//!
//! A biconnected component has no internal cut vertex, so two of its nodes
//! are joined by two internally node-disjoint paths. If the BFS path passes
//! through two nodes of a component, any other node of that component can
//! be spliced in without repeating a node. A simple path that only touches
//! a component at one node cannot have entered and left it through
//! different nodes, so components with a single path node are excluded.
//!
//! A direct edge `(s, t)` is a one-edge component with both endpoints on the
//! path, so `s` and `t` are always in a non-empty result.
//!
//! # Edge Cases
//!
//! - `s` or `t` absent from the graph: `NoPathFound`.
//! - `s == t` and present: the result is `{s}`, the zero-length path.

#![allow(clippy::module_name_repetitions)]

use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

use fixedbitset::FixedBitSet;
use tracing::{debug, instrument};

use crate::error::PathError;
use crate::graph::biconnected::{BiconnectedAnalysis, analyze_from};
use crate::graph::store::{GraphStore, NodeId};

// ---------------------------------------------------------------------------
// PathOutcome
// ---------------------------------------------------------------------------

/// Result of a path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome<N> {
    /// Nodes on some simple `s`–`t` path, in store insertion order.
    Nodes(Vec<N>),
    /// `t` is not reachable from `s`, or a query node is not in the graph.
    NoPathFound,
}

impl<N> PathOutcome<N> {
    /// The qualifying nodes; empty for [`PathOutcome::NoPathFound`].
    #[must_use]
    pub fn into_nodes(self) -> Vec<N> {
        match self {
            Self::Nodes(nodes) => nodes,
            Self::NoPathFound => Vec::new(),
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Nodes(_))
    }
}

// ---------------------------------------------------------------------------
// PathFilter
// ---------------------------------------------------------------------------

/// Read-only consumer of a store and a finished traversal over it.
#[derive(Debug, Clone, Copy)]
pub struct PathFilter<'a, N> {
    store: &'a GraphStore<N>,
    analysis: &'a BiconnectedAnalysis,
}

impl<'a, N> PathFilter<'a, N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    /// `analysis` must come from a traversal over `store`.
    #[must_use]
    pub const fn new(store: &'a GraphStore<N>, analysis: &'a BiconnectedAnalysis) -> Self {
        Self { store, analysis }
    }

    /// Every node that can appear on some simple path from `source` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::NotTraversed`] when a path exists but the
    /// analysis did not visit `source`, i.e. it was rooted in another
    /// connected component.
    #[instrument(skip(self))]
    pub fn nodes_between(&self, source: &N, target: &N) -> Result<PathOutcome<N>, PathError> {
        let (Some(s), Some(t)) = (self.store.index_of(source), self.store.index_of(target)) else {
            debug!("query node not in graph");
            return Ok(PathOutcome::NoPathFound);
        };

        let Some(path) = shortest_path(self.store, s, t) else {
            debug!("target unreachable from source");
            return Ok(PathOutcome::NoPathFound);
        };

        if s == t {
            return Ok(PathOutcome::Nodes(vec![source.clone()]));
        }

        if !self.analysis.is_visited(s) {
            return Err(PathError::NotTraversed {
                node: format!("{source:?}"),
            });
        }

        let selected = self.expand(&path);
        debug!(
            path_len = path.len(),
            selected = selected.count_ones(..),
            "path expanded through biconnected components"
        );

        Ok(PathOutcome::Nodes(
            selected
                .ones()
                .map(|i| self.store.node(NodeId(i)).clone())
                .collect(),
        ))
    }

    /// Union of all components incident to two or more nodes of `path`.
    fn expand(&self, path: &[NodeId]) -> FixedBitSet {
        let n = self.store.node_count();
        let mut on_path = FixedBitSet::with_capacity(n);
        for node in path {
            on_path.insert(node.index());
        }

        let mut selected = FixedBitSet::with_capacity(n);
        for component in self.analysis.components() {
            let touched = component
                .nodes()
                .iter()
                .filter(|node| on_path.contains(node.index()))
                .take(2)
                .count();
            if touched >= 2 {
                for node in component.nodes() {
                    selected.insert(node.index());
                }
            }
        }
        selected
    }
}

/// Query `source`–`target` with a traversal rooted at `source`.
///
/// Rooting at the source guarantees the traversal covers every node of any
/// `source`–`target` path.
#[must_use]
pub fn acyclic_path_nodes<N>(store: &GraphStore<N>, source: &N, target: &N) -> PathOutcome<N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    let Ok(analysis) = analyze_from(store, source) else {
        return PathOutcome::NoPathFound;
    };
    PathFilter::new(store, &analysis)
        .nodes_between(source, target)
        .unwrap_or(PathOutcome::NoPathFound)
}

/// BFS shortest path `s → t` inclusive of both ends.
fn shortest_path<N>(store: &GraphStore<N>, s: NodeId, t: NodeId) -> Option<Vec<NodeId>> {
    if s == t {
        return Some(vec![s]);
    }

    let mut parent: Vec<Option<NodeId>> = vec![None; store.node_count()];
    let mut seen = FixedBitSet::with_capacity(store.node_count());
    let mut queue = VecDeque::from([s]);
    seen.insert(s.index());

    while let Some(current) = queue.pop_front() {
        for &next in store.neighbor_ids(current) {
            if seen.put(next.index()) {
                continue;
            }
            parent[next.index()] = Some(current);
            if next == t {
                return Some(reconstruct(&parent, s, t));
            }
            queue.push_back(next);
        }
    }

    None
}

fn reconstruct(parent: &[Option<NodeId>], s: NodeId, t: NodeId) -> Vec<NodeId> {
    let mut path = vec![t];
    let mut cursor = t;
    while cursor != s {
        let Some(prev) = parent[cursor.index()] else {
            break;
        };
        path.push(prev);
        cursor = prev;
    }
    path.reverse();
    path
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
