//! Undirected simple graph built from pairwise edge insertions.
//!
//! # Node Indexing
//!
//! Every node gets a dense [`NodeId`] on first encounter, in insertion
//! order. All traversal state elsewhere in the crate is kept in vectors
//! indexed by `NodeId`, so the store is the only place that maps between
//! caller-supplied identifiers and indices.
//!
//! ## Edge Identity
//!
//! `(u, v)` and `(v, u)` are the same edge. A repeated edge is discarded
//! with a warning; it never reaches the adjacency lists, so the traversal
//! never sees parallel edges to its DFS parent.
//!
//! ## Self-loops
//!
//! Rejected with [`GraphError::InvalidEdge`].

#![allow(clippy::module_name_repetitions)]

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use serde::Serialize;
use tracing::warn;

use crate::error::GraphError;

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// Dense index of a node inside a [`GraphStore`], assigned on first encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of this node in insertion order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of [`GraphStore::add_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsertion {
    /// The edge was new and has been stored.
    Inserted,
    /// The edge already existed (in either orientation) and was discarded.
    Duplicate,
}

// ---------------------------------------------------------------------------
// GraphStore
// ---------------------------------------------------------------------------

/// An undirected simple graph over opaque node identifiers.
///
/// Adjacency lists preserve insertion order so traversals are reproducible.
#[derive(Debug, Clone)]
pub struct GraphStore<N> {
    nodes: Vec<N>,
    index: HashMap<N, NodeId>,
    adjacency: Vec<Vec<NodeId>>,
    /// Canonical `(min, max)` pairs for O(1) duplicate detection.
    edge_set: HashSet<(NodeId, NodeId)>,
    /// Edges in insertion order, as first offered.
    edges: Vec<(NodeId, NodeId)>,
}

impl<N> Default for GraphStore<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edge_set: HashSet::new(),
            edges: Vec::new(),
        }
    }
}

impl<N> GraphStore<N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the unordered pair `{u, v}`.
    ///
    /// Unknown endpoints become nodes. An edge that is already present in
    /// either orientation is discarded and logged at `warn`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidEdge`] when `u == v`.
    pub fn add_edge(&mut self, u: N, v: N) -> Result<EdgeInsertion, GraphError> {
        if u == v {
            return Err(GraphError::invalid_edge(&u));
        }

        let ui = self.intern(u);
        let vi = self.intern(v);

        if !self.edge_set.insert(canonical(ui, vi)) {
            warn!(
                u = ?self.nodes[ui.0],
                v = ?self.nodes[vi.0],
                "duplicate edge discarded"
            );
            return Ok(EdgeInsertion::Duplicate);
        }

        self.adjacency[ui.0].push(vi);
        self.adjacency[vi.0].push(ui);
        self.edges.push((ui, vi));
        Ok(EdgeInsertion::Inserted)
    }

    /// Neighbors of `node` in insertion order. Empty if the node is unknown.
    pub fn neighbors(&self, node: &N) -> impl Iterator<Item = &N> + '_ {
        let ids = self
            .index_of(node)
            .map_or(&[][..], |id| self.adjacency[id.0].as_slice());
        ids.iter().map(|id| &self.nodes[id.0])
    }

    /// Look up the [`NodeId`] of a node.
    #[must_use]
    pub fn index_of(&self, node: &N) -> Option<NodeId> {
        self.index.get(node).copied()
    }

    /// Whether the undirected edge `{u, v}` is stored.
    #[must_use]
    pub fn contains_edge(&self, u: &N, v: &N) -> bool {
        match (self.index_of(u), self.index_of(v)) {
            (Some(ui), Some(vi)) => self.edge_set.contains(&canonical(ui, vi)),
            _ => false,
        }
    }

    /// Whether the node appears in any stored edge.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    fn intern(&mut self, node: N) -> NodeId {
        if let Some(&id) = self.index.get(&node) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(node.clone());
        self.index.insert(node, id);
        self.adjacency.push(Vec::new());
        id
    }
}

impl<N> GraphStore<N> {
    /// Number of distinct nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether no edge has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The identifier stored under `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this store.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &N {
        &self.nodes[id.0]
    }

    /// Neighbor indices of `id`, in insertion order.
    #[must_use]
    pub fn neighbor_ids(&self, id: NodeId) -> &[NodeId] {
        self.adjacency.get(id.0).map_or(&[][..], Vec::as_slice)
    }

    /// All node indices in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// All node identifiers in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    /// Stored edges in insertion order, oriented as first offered.
    #[must_use]
    pub fn edge_ids(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    /// Stored edges as identifier pairs, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.edges
            .iter()
            .map(|&(u, v)| (&self.nodes[u.0], &self.nodes[v.0]))
    }
}

impl<N> FromIterator<(N, N)> for GraphStore<N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    /// Collect edge pairs. Self-loops are logged and skipped.
    fn from_iter<I: IntoIterator<Item = (N, N)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (u, v) in iter {
            if let Err(err) = store.add_edge(u, v) {
                warn!(%err, "edge skipped");
            }
        }
        store
    }
}

const fn canonical(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a.0 <= b.0 { (a, b) } else { (b, a) }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
