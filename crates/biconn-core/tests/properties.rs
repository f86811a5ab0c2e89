//! Property tests for the biconnectivity engine and the path filter.
//!
//! Oracles:
//! - articulation points: remove each node and count connected components
//!   with `petgraph::algo::connected_components`;
//! - path filter: enumerate every simple s–t path on small graphs.

use std::collections::{BTreeSet, HashMap};

use biconn_core::{BiconnectedAnalysis, GraphStore, NodeId, acyclic_path_nodes, analyze};
use petgraph::algo::connected_components;
use petgraph::graph::UnGraph;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Random edge lists over `0..max_nodes`, self-loops removed. Repeats are
/// kept so the store's de-duplication is exercised too.
fn arb_edges(max_nodes: u8, max_edges: usize) -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0..max_nodes, 0..max_nodes), 0..=max_edges)
        .prop_map(|pairs| pairs.into_iter().filter(|(u, v)| u != v).collect())
}

fn store_of(edges: &[(u8, u8)]) -> GraphStore<u8> {
    edges.iter().copied().collect()
}

fn canonical(u: NodeId, v: NodeId) -> (usize, usize) {
    (u.index().min(v.index()), u.index().max(v.index()))
}

// ---------------------------------------------------------------------------
// Oracles
// ---------------------------------------------------------------------------

/// Connected components of the subgraph induced by `nodes`, minus `removed`.
fn component_count(
    nodes: &[NodeId],
    edges: &[(NodeId, NodeId)],
    removed: Option<NodeId>,
) -> usize {
    let mut graph = UnGraph::<(), ()>::new_undirected();
    let mut map = HashMap::new();
    for &node in nodes {
        if Some(node) != removed {
            map.insert(node, graph.add_node(()));
        }
    }
    for (u, v) in edges {
        if let (Some(&a), Some(&b)) = (map.get(u), map.get(v)) {
            graph.add_edge(a, b, ());
        }
    }
    connected_components(&graph)
}

fn brute_force_path_nodes(store: &GraphStore<u8>, s: u8, t: u8) -> BTreeSet<u8> {
    fn extend(
        store: &GraphStore<u8>,
        t: u8,
        path: &mut Vec<u8>,
        result: &mut BTreeSet<u8>,
    ) {
        let last = *path.last().expect("path starts at s");
        if last == t {
            result.extend(path.iter().copied());
            return;
        }
        let neighbors: Vec<u8> = store.neighbors(&last).copied().collect();
        for next in neighbors {
            if !path.contains(&next) {
                path.push(next);
                extend(store, t, path, result);
                path.pop();
            }
        }
    }

    let mut result = BTreeSet::new();
    if store.contains_node(&s) && store.contains_node(&t) {
        extend(store, t, &mut vec![s], &mut result);
    }
    result
}

fn traversed_edges(store: &GraphStore<u8>, analysis: &BiconnectedAnalysis) -> Vec<(NodeId, NodeId)> {
    store
        .edge_ids()
        .iter()
        .copied()
        .filter(|&(u, _)| analysis.is_visited(u))
        .collect()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_components_partition_traversed_edges(edges in arb_edges(12, 30)) {
        let store = store_of(&edges);
        let analysis = analyze(&store);

        let expected: BTreeSet<(usize, usize)> = traversed_edges(&store, &analysis)
            .into_iter()
            .map(|(u, v)| canonical(u, v))
            .collect();

        let assigned: Vec<(usize, usize)> = analysis
            .components()
            .iter()
            .flat_map(|c| c.edges().iter().map(|&(u, v)| canonical(u, v)))
            .collect();
        let assigned_set: BTreeSet<(usize, usize)> = assigned.iter().copied().collect();

        prop_assert_eq!(assigned.len(), assigned_set.len(), "an edge appears in two components");
        prop_assert_eq!(assigned_set, expected);
    }

    #[test]
    fn prop_low_never_exceeds_dfs_number(edges in arb_edges(12, 30)) {
        let store = store_of(&edges);
        let analysis = analyze(&store);

        for node in analysis.visited_nodes() {
            let dfs = analysis.dfs_number(node).expect("visited");
            let low = analysis.low(node).expect("visited");
            prop_assert!(low <= dfs, "low {} > dfs {} for {}", low, dfs, node);
        }
    }

    #[test]
    fn prop_dfs_numbers_are_a_bijection(edges in arb_edges(12, 30)) {
        let store = store_of(&edges);
        let analysis = analyze(&store);

        let mut numbers: Vec<usize> = analysis
            .visited_nodes()
            .filter_map(|node| analysis.dfs_number(node))
            .collect();
        numbers.sort_unstable();
        let expected: Vec<usize> = (1..=analysis.visited_count()).collect();
        prop_assert_eq!(numbers, expected);
    }

    #[test]
    fn prop_articulation_points_match_removal_oracle(edges in arb_edges(12, 20)) {
        let store = store_of(&edges);
        let analysis = analyze(&store);

        let nodes: Vec<NodeId> = analysis.visited_nodes().collect();
        let sub_edges = traversed_edges(&store, &analysis);
        let baseline = component_count(&nodes, &sub_edges, None);

        for &node in &nodes {
            let without = component_count(&nodes, &sub_edges, Some(node));
            prop_assert_eq!(
                analysis.is_articulation_point(node),
                without > baseline,
                "node {} (removal leaves {} components, baseline {})",
                node,
                without,
                baseline
            );
        }

        let listed: BTreeSet<NodeId> = analysis.articulation_points().iter().copied().collect();
        prop_assert_eq!(listed.len(), analysis.articulation_points().len(), "listed twice");
    }

    #[test]
    fn prop_path_filter_matches_simple_path_enumeration(
        edges in arb_edges(7, 12),
        s in 0u8..7,
        t in 0u8..7,
    ) {
        let store = store_of(&edges);
        let got: BTreeSet<u8> = acyclic_path_nodes(&store, &s, &t).into_nodes().into_iter().collect();
        let expected = brute_force_path_nodes(&store, s, t);
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_path_filter_ignores_insertion_order(
        (edges, shuffled) in arb_edges(10, 18)
            .prop_flat_map(|edges| (Just(edges.clone()), Just(edges).prop_shuffle())),
        flip in any::<bool>(),
        s in 0u8..10,
        t in 0u8..10,
    ) {
        let reordered: Vec<(u8, u8)> = shuffled
            .into_iter()
            .map(|(u, v)| if flip { (v, u) } else { (u, v) })
            .collect();

        let first: BTreeSet<u8> = acyclic_path_nodes(&store_of(&edges), &s, &t)
            .into_nodes()
            .into_iter()
            .collect();
        let second: BTreeSet<u8> = acyclic_path_nodes(&store_of(&reordered), &s, &t)
            .into_nodes()
            .into_iter()
            .collect();
        prop_assert_eq!(first, second);
    }
}
