//! Ordered registry of biconnected components.
//!
//! Populated append-only by the traversal in [`crate::graph::biconnected`];
//! read-only afterwards.

#![allow(clippy::module_name_repetitions)]

use serde::Serialize;

use crate::graph::store::NodeId;

/// One biconnected component: a sequential id and its member edges.
///
/// Edges are oriented as the traversal walked them (`parent → child` for
/// tree edges, `descendant → ancestor` for back edges).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BiconnectedComponent {
    id: usize,
    edges: Vec<(NodeId, NodeId)>,
    /// Distinct endpoints of `edges`, sorted by index.
    nodes: Vec<NodeId>,
}

impl BiconnectedComponent {
    pub(crate) fn new(id: usize, edges: Vec<(NodeId, NodeId)>) -> Self {
        let mut nodes: Vec<NodeId> = edges.iter().flat_map(|&(u, v)| [u, v]).collect();
        nodes.sort_unstable();
        nodes.dedup();
        Self { id, edges, nodes }
    }

    /// Sequential id, starting at 0 in order of discovery.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Member edges in the order they were popped off the edge stack.
    #[must_use]
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    /// Every node incident to at least one member edge.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Whether `node` is incident to a member edge.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.binary_search(&node).is_ok()
    }

    /// A single-edge component is a bridge.
    #[must_use]
    pub fn is_bridge(&self) -> bool {
        self.edges.len() == 1
    }
}

/// Components in discovery order; `get(i)` has id `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ComponentRegistry {
    components: Vec<BiconnectedComponent>,
}

impl ComponentRegistry {
    /// Append a component built from `edges`, assigning the next id.
    pub(crate) fn push(&mut self, edges: Vec<(NodeId, NodeId)>) -> usize {
        let id = self.components.len();
        self.components.push(BiconnectedComponent::new(id, edges));
        id
    }

    /// Total component count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: usize) -> Option<&BiconnectedComponent> {
        self.components.get(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BiconnectedComponent> {
        self.components.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[BiconnectedComponent] {
        &self.components
    }
}

impl<'a> IntoIterator for &'a ComponentRegistry {
    type Item = &'a BiconnectedComponent;
    type IntoIter = std::slice::Iter<'a, BiconnectedComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
