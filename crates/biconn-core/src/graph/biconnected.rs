//! Biconnected components and articulation points in one depth-first pass.
//!
//! # Algorithm
//!
//! Classical low-link DFS. Visiting `v`:
//!
//! 1. `dfs[v]` comes from a counter starting at 1; `low[v] = dfs[v]`.
//! 2. For each neighbor `x` in adjacency order:
//!    - unvisited: `level[x] = level[v] + 1`, count a child of `v`, push the
//!      tree edge `(v, x)`, descend. When `x` returns,
//!      `low[v] = min(low[v], low[x])`, then
//!      - at the root (`dfs[v] == 1`) close a component ending at `(v, x)`
//!        unconditionally, and mark `v` once it has two or more children;
//!      - elsewhere, if `low[x] >= dfs[v]`, mark `v` and close a component
//!        ending at `(v, x)`.
//!    - visited with `level[x] < level[v] - 1`: back edge to a strict
//!      ancestor. `low[v] = min(low[v], dfs[x])` and push `(v, x)`. The
//!      direct parent sits at `level[v] - 1` and is skipped by this test.
//! 3. Closing a component pops the edge stack down to and including `(v, x)`.
//!
//! The root cuts a component after every child subtree, even when it has a
//! single child and is not an articulation point.
//!
//! # Explicit Stack
//!
//! Recursion is replaced by a stack of `(node, neighbor cursor)` frames.
//! All per-node state lives in vectors indexed by [`NodeId`], and the DFS
//! counter and edge stack live in one [`Traversal`] context, so a path graph
//! of any length is traversed without growing the native call stack.
//!
//! # Coverage
//!
//! Only the root's connected component is visited. Nodes elsewhere keep
//! `dfs_number == None`.

#![allow(clippy::module_name_repetitions)]

use std::fmt;
use std::hash::Hash;

use fixedbitset::FixedBitSet;
use tracing::{debug, instrument, trace};

use crate::error::GraphError;
use crate::graph::components::ComponentRegistry;
use crate::graph::store::{GraphStore, NodeId};

/// Sentinel for "not yet visited" in `dfs_number`.
const UNVISITED: usize = 0;

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Run the traversal from the first inserted node.
///
/// An empty store yields an empty analysis.
#[must_use]
pub fn analyze<N>(store: &GraphStore<N>) -> BiconnectedAnalysis {
    store.node_ids().next().map_or_else(
        || BiconnectedAnalysis::empty(store.node_count()),
        |root| Traversal::new(store).run(root),
    )
}

/// Run the traversal rooted at `root`.
///
/// # Errors
///
/// Returns [`GraphError::UnknownNode`] if `root` is not in the store.
#[instrument(skip_all, fields(root = ?root, nodes = store.node_count(), edges = store.edge_count()))]
pub fn analyze_from<N>(store: &GraphStore<N>, root: &N) -> Result<BiconnectedAnalysis, GraphError>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    let id = store
        .index_of(root)
        .ok_or_else(|| GraphError::unknown_node(root))?;
    Ok(Traversal::new(store).run(id))
}

/// One independent traversal per connected component, in order of each
/// component's first inserted node.
///
/// Every analysis has its own numbering starting at 1 and its own component
/// ids starting at 0.
#[must_use]
pub fn analyze_forest<N>(store: &GraphStore<N>) -> Vec<BiconnectedAnalysis> {
    let mut covered = FixedBitSet::with_capacity(store.node_count());
    let mut forest = Vec::new();

    for id in store.node_ids() {
        if covered.contains(id.index()) {
            continue;
        }
        let analysis = Traversal::new(store).run(id);
        for visited in analysis.visited_nodes() {
            covered.insert(visited.index());
        }
        forest.push(analysis);
    }

    debug!(trees = forest.len(), "forest traversal complete");
    forest
}

// ---------------------------------------------------------------------------
// BiconnectedAnalysis
// ---------------------------------------------------------------------------

/// Result of one traversal: numbering, low-links, articulation points and
/// the biconnected components of the root's connected component.
#[derive(Debug, Clone)]
pub struct BiconnectedAnalysis {
    root: Option<NodeId>,
    states: NodeStates,
    visited: usize,
    registry: ComponentRegistry,
    /// Articulation points in detection order.
    articulation_points: Vec<NodeId>,
    articulation_set: FixedBitSet,
}

impl BiconnectedAnalysis {
    fn empty(node_count: usize) -> Self {
        Self {
            root: None,
            states: NodeStates::new(node_count),
            visited: 0,
            registry: ComponentRegistry::default(),
            articulation_points: Vec::new(),
            articulation_set: FixedBitSet::with_capacity(node_count),
        }
    }

    /// The traversal root, `None` for an empty graph.
    #[must_use]
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Visitation order of `node`, starting at 1.
    #[must_use]
    pub fn dfs_number(&self, node: NodeId) -> Option<usize> {
        self.states
            .dfs_number
            .get(node.index())
            .copied()
            .filter(|&n| n != UNVISITED)
    }

    /// Smallest DFS number reachable from the subtree of `node` through one
    /// back edge.
    #[must_use]
    pub fn low(&self, node: NodeId) -> Option<usize> {
        self.dfs_number(node).map(|_| self.states.low[node.index()])
    }

    /// Depth of `node` in the DFS tree; the root is at 0.
    #[must_use]
    pub fn level(&self, node: NodeId) -> Option<usize> {
        self.dfs_number(node).map(|_| self.states.level[node.index()])
    }

    /// Number of tree-edge children of `node`.
    #[must_use]
    pub fn child_count(&self, node: NodeId) -> Option<usize> {
        self.dfs_number(node)
            .map(|_| self.states.child_count[node.index()])
    }

    #[must_use]
    pub fn is_visited(&self, node: NodeId) -> bool {
        self.dfs_number(node).is_some()
    }

    /// Number of nodes the traversal reached.
    #[must_use]
    pub const fn visited_count(&self) -> usize {
        self.visited
    }

    /// Visited nodes in index order.
    pub fn visited_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.states
            .dfs_number
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n != UNVISITED)
            .map(|(i, _)| NodeId(i))
    }

    #[must_use]
    pub const fn components(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Articulation points, each listed once, in detection order.
    #[must_use]
    pub fn articulation_points(&self) -> &[NodeId] {
        &self.articulation_points
    }

    #[must_use]
    pub fn is_articulation_point(&self, node: NodeId) -> bool {
        self.articulation_set.contains(node.index())
    }

    /// Edges whose removal disconnects the traversed subgraph.
    pub fn bridges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.registry
            .iter()
            .filter(|component| component.is_bridge())
            .flat_map(|component| component.edges().iter().copied())
    }
}

// ---------------------------------------------------------------------------
// Traversal context
// ---------------------------------------------------------------------------

/// Per-node traversal state, struct-of-arrays indexed by [`NodeId`].
#[derive(Debug, Clone)]
struct NodeStates {
    dfs_number: Vec<usize>,
    low: Vec<usize>,
    level: Vec<usize>,
    child_count: Vec<usize>,
}

impl NodeStates {
    fn new(node_count: usize) -> Self {
        Self {
            dfs_number: vec![UNVISITED; node_count],
            low: vec![UNVISITED; node_count],
            level: vec![0; node_count],
            child_count: vec![0; node_count],
        }
    }
}

/// A suspended visit: the node and the position of the next neighbor to try.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    cursor: usize,
}

/// Mutable state of a single traversal. Consumed by [`Traversal::run`].
struct Traversal<'g, N> {
    store: &'g GraphStore<N>,
    states: NodeStates,
    counter: usize,
    frames: Vec<Frame>,
    edge_stack: Vec<(NodeId, NodeId)>,
    registry: ComponentRegistry,
    articulation_points: Vec<NodeId>,
    articulation_set: FixedBitSet,
}

impl<'g, N> Traversal<'g, N> {
    fn new(store: &'g GraphStore<N>) -> Self {
        let n = store.node_count();
        Self {
            store,
            states: NodeStates::new(n),
            counter: 0,
            frames: Vec::new(),
            edge_stack: Vec::new(),
            registry: ComponentRegistry::default(),
            articulation_points: Vec::new(),
            articulation_set: FixedBitSet::with_capacity(n),
        }
    }

    fn run(mut self, root: NodeId) -> BiconnectedAnalysis {
        let store = self.store;

        self.discover(root);
        self.frames.push(Frame {
            node: root,
            cursor: 0,
        });

        while let Some(frame) = self.frames.last_mut() {
            let v = frame.node;
            let next = store.neighbor_ids(v).get(frame.cursor).copied();

            if let Some(x) = next {
                frame.cursor += 1;
                self.explore_edge(v, x);
            } else {
                self.frames.pop();
                if let Some(&Frame { node: parent, .. }) = self.frames.last() {
                    self.child_returned(parent, v);
                }
            }
        }

        debug_assert!(self.edge_stack.is_empty(), "every edge must be assigned");

        debug!(
            visited = self.counter,
            components = self.registry.len(),
            articulation_points = self.articulation_points.len(),
            "biconnectivity traversal complete"
        );

        BiconnectedAnalysis {
            root: Some(root),
            states: self.states,
            visited: self.counter,
            registry: self.registry,
            articulation_points: self.articulation_points,
            articulation_set: self.articulation_set,
        }
    }

    fn discover(&mut self, node: NodeId) {
        self.counter += 1;
        self.states.dfs_number[node.index()] = self.counter;
        self.states.low[node.index()] = self.counter;
    }

    fn explore_edge(&mut self, v: NodeId, x: NodeId) {
        let (vi, xi) = (v.index(), x.index());

        if self.states.dfs_number[xi] == UNVISITED {
            self.states.level[xi] = self.states.level[vi] + 1;
            self.states.child_count[vi] += 1;
            self.edge_stack.push((v, x));
            self.discover(x);
            self.frames.push(Frame { node: x, cursor: 0 });
        } else if self.states.level[xi] + 1 < self.states.level[vi] {
            // Back edge to a strict ancestor.
            self.states.low[vi] = self.states.low[vi].min(self.states.dfs_number[xi]);
            self.edge_stack.push((v, x));
        }
    }

    fn child_returned(&mut self, v: NodeId, x: NodeId) {
        let (vi, xi) = (v.index(), x.index());
        self.states.low[vi] = self.states.low[vi].min(self.states.low[xi]);

        if self.states.dfs_number[vi] == 1 {
            self.close_component(v, x);
            if self.states.child_count[vi] >= 2 {
                self.mark_articulation(v);
            }
        } else if self.states.low[xi] >= self.states.dfs_number[vi] {
            self.mark_articulation(v);
            self.close_component(v, x);
        }
    }

    fn mark_articulation(&mut self, node: NodeId) {
        if !self.articulation_set.put(node.index()) {
            trace!(node = node.index(), "articulation point");
            self.articulation_points.push(node);
        }
    }

    fn close_component(&mut self, v: NodeId, x: NodeId) {
        let mut edges = Vec::new();
        while let Some(edge) = self.edge_stack.pop() {
            edges.push(edge);
            if edge == (v, x) {
                break;
            }
        }
        let id = self.registry.push(edges);
        trace!(id, v = v.index(), x = x.index(), "closed biconnected component");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
