//! Whole-graph connectivity summary.
//!
//! # Statistics Provided
//!
//! - **node_count** / **edge_count**: size of the stored graph.
//! - **connected_component_count**: number of traversal trees needed to
//!   cover every node.
//! - **biconnected_component_count**: biconnected components across all
//!   connected components.
//! - **articulation_point_count**: cut vertices across all connected
//!   components.
//! - **bridge_count**: single-edge biconnected components.
//! - **largest_component_edges**: edge count of the biggest biconnected
//!   component. Zero for an empty graph.

use serde::Serialize;

use crate::graph::biconnected::{BiconnectedAnalysis, analyze_forest};
use crate::graph::store::GraphStore;

/// Summary statistics for a [`GraphStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub connected_component_count: usize,
    pub biconnected_component_count: usize,
    pub articulation_point_count: usize,
    pub bridge_count: usize,
    pub largest_component_edges: usize,
}

impl GraphSummary {
    /// Run one traversal per connected component and aggregate.
    #[must_use]
    pub fn from_store<N>(store: &GraphStore<N>) -> Self {
        let forest = analyze_forest(store);
        Self::from_forest(store, &forest)
    }

    /// Aggregate already computed traversals over `store`.
    #[must_use]
    pub fn from_forest<N>(store: &GraphStore<N>, forest: &[BiconnectedAnalysis]) -> Self {
        let components = || forest.iter().flat_map(|tree| tree.components().iter());

        Self {
            node_count: store.node_count(),
            edge_count: store.edge_count(),
            connected_component_count: forest.len(),
            biconnected_component_count: components().count(),
            articulation_point_count: forest
                .iter()
                .map(|tree| tree.articulation_points().len())
                .sum(),
            bridge_count: components().filter(|c| c.is_bridge()).count(),
            largest_component_edges: components().map(|c| c.edges().len()).max().unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_summary_is_all_zero() {
        let store: GraphStore<u32> = GraphStore::new();
        let summary = GraphSummary::from_store(&store);

        assert_eq!(
            summary,
            GraphSummary {
                node_count: 0,
                edge_count: 0,
                connected_component_count: 0,
                biconnected_component_count: 0,
                articulation_point_count: 0,
                bridge_count: 0,
                largest_component_edges: 0,
            }
        );
    }

    #[test]
    fn summary_spans_all_connected_components() {
        // Square with a tail, plus a separate single edge.
        let store: GraphStore<&str> = [
            ("a", "b"),
            ("b", "c"),
            ("c", "d"),
            ("d", "a"),
            ("d", "e"),
            ("x", "y"),
        ]
        .into_iter()
        .collect();

        let summary = GraphSummary::from_store(&store);

        assert_eq!(summary.node_count, 7);
        assert_eq!(summary.edge_count, 6);
        assert_eq!(summary.connected_component_count, 2);
        assert_eq!(summary.biconnected_component_count, 3);
        assert_eq!(summary.articulation_point_count, 1);
        assert_eq!(summary.bridge_count, 2);
        assert_eq!(summary.largest_component_edges, 4);
    }
}
