//! Undirected graph storage and biconnectivity analysis.
//!
//! # Overview
//!
//! [`GraphStore`] accumulates a simple undirected graph from edge pairs.
//! A single depth-first traversal over the store produces a
//! [`BiconnectedAnalysis`]: DFS numbering, low-link values, the set of
//! articulation points, and the [`ComponentRegistry`] of biconnected
//! components.
//!
//! ## Coverage
//!
//! One traversal only reaches the connected component of its root. Use
//! [`analyze_forest`] when every connected component has to be covered.
//!
//! ## Typical Usage
//!
//! ```rust
//! use biconn_core::graph::{GraphStore, analyze};
//!
//! let mut store = GraphStore::new();
//! for (u, v) in [("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")] {
//!     store.add_edge(u, v)?;
//! }
//!
//! let analysis = analyze(&store);
//! assert_eq!(analysis.components().len(), 2);
//! let c = store.index_of(&"c").expect("c is stored");
//! assert!(analysis.is_articulation_point(c));
//! # Ok::<(), biconn_core::GraphError>(())
//! ```

pub mod biconnected;
pub mod components;
pub mod store;

pub use biconnected::{BiconnectedAnalysis, analyze, analyze_forest, analyze_from};
pub use components::{BiconnectedComponent, ComponentRegistry};
pub use store::{EdgeInsertion, GraphStore, NodeId};
