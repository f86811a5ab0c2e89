pub mod completions;
pub mod components;
pub mod cut_vertices;
pub mod paths;
pub mod stats;

use biconn_core::edge_list::EdgeList;
use biconn_core::{BiconnectedAnalysis, NodeId, analyze, analyze_from};

use crate::output::{CliError, OutputMode, render_error};

/// Traversal root precedence: `--root`, then the source query node, then the
/// first node read. `None` for an empty graph.
///
/// # Errors
///
/// Returns an error, after rendering it, if an explicit root is not in the
/// graph.
pub fn traverse(
    list: &EdgeList,
    root: Option<&str>,
    output: OutputMode,
) -> anyhow::Result<Option<(String, BiconnectedAnalysis)>> {
    let chosen = root
        .map(str::to_string)
        .or_else(|| list.source.clone().filter(|s| list.store.contains_node(s)));

    let analysis = match chosen {
        Some(ref name) => match analyze_from(&list.store, name) {
            Ok(analysis) => analysis,
            Err(err) => {
                render_error(
                    output,
                    &CliError::with_details(
                        err.to_string(),
                        "pass a --root that appears in at least one edge",
                        "unknown_root",
                    ),
                )?;
                anyhow::bail!("unknown_root");
            }
        },
        None => analyze(&list.store),
    };

    Ok(analysis
        .root()
        .map(|id| (list.store.node(id).clone(), analysis)))
}

/// Resolve node ids to names, optionally sorted.
pub fn names(list: &EdgeList, ids: &[NodeId], sort: bool) -> Vec<String> {
    let mut out: Vec<String> = ids.iter().map(|&id| list.store.node(id).clone()).collect();
    if sort {
        out.sort_unstable();
    }
    out
}
