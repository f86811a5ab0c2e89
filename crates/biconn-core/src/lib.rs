#![forbid(unsafe_code)]
//! biconn-core library.
//!
//! Undirected graph connectivity analysis: biconnected components, cut
//! vertices, and the set of nodes that can appear on some simple path
//! between two query nodes.
//!
//! # Pipeline
//!
//! ```text
//! edge pairs
//!        ↓  graph::GraphStore::add_edge()
//! GraphStore (deduplicated, insertion-ordered adjacency)
//!        ↓  graph::analyze_from()
//! BiconnectedAnalysis
//!   ├─ ComponentRegistry: biconnected components (id + edges)
//!   └─ articulation points
//!        ↓  path::PathFilter::nodes_between()
//! PathOutcome (nodes on some acyclic s–t path)
//! ```
//!
//! # Conventions
//!
//! - **Errors**: typed `thiserror` enums in [`error`]; "no path" is a normal
//!   [`path::PathOutcome`], not an error.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod edge_list;
pub mod error;
pub mod graph;
pub mod path;
pub mod summary;

pub use error::{GraphError, ParseError, PathError};
pub use graph::{
    BiconnectedAnalysis, BiconnectedComponent, ComponentRegistry, EdgeInsertion, GraphStore,
    NodeId, analyze, analyze_forest, analyze_from,
};
pub use path::{PathFilter, PathOutcome, acyclic_path_nodes};
pub use summary::GraphSummary;
