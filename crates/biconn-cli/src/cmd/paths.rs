//! `biconn paths` — nodes that can lie on some acyclic path between the
//! two query nodes.

use std::io::Write;
use std::path::PathBuf;

use biconn_core::acyclic_path_nodes;
use clap::Args;
use serde::Serialize;
use tracing::warn;

use crate::config::AnalysisConfig;
use crate::input::{fail, load_edge_list};
use crate::output::{OutputMode, pretty_section, render_mode};

/// Arguments for `biconn paths`.
#[derive(Args, Debug, Default)]
pub struct PathsArgs {
    /// Edge list file; `-` or omitted reads stdin.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct PathsOutput {
    source: String,
    target: String,
    found: bool,
    nodes: Vec<String>,
}

/// Execute `biconn paths`.
pub fn run_paths(
    args: &PathsArgs,
    config: &AnalysisConfig,
    output: OutputMode,
) -> anyhow::Result<()> {
    let list = load_edge_list(args.file.as_deref(), config.input.duplicate_edges, output)?;

    let (source, target) = match list.query() {
        Ok((s, t)) => (s.to_string(), t.to_string()),
        Err(err) => return fail(output, &err),
    };

    for node in [&source, &target] {
        if !list.store.contains_node(node) {
            warn!(node = %node, "query node does not appear in any edge");
        }
    }

    let outcome = acyclic_path_nodes(&list.store, &source, &target);
    let found = outcome.is_found();
    let mut nodes = outcome.into_nodes();
    if config.output.sort {
        nodes.sort_unstable();
    }

    let payload = PathsOutput {
        source,
        target,
        found,
        nodes,
    };

    render_mode(output, &payload, render_paths_text, render_paths_pretty)
}

fn render_paths_text(payload: &PathsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    for node in &payload.nodes {
        writeln!(w, "{node}")?;
    }
    Ok(())
}

fn render_paths_pretty(payload: &PathsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    if !payload.found {
        writeln!(w, "No path from {} to {}.", payload.source, payload.target)?;
        return Ok(());
    }

    pretty_section(
        w,
        &format!(
            "Nodes on acyclic paths {} → {} ({})",
            payload.source,
            payload.target,
            payload.nodes.len()
        ),
    )?;
    for node in &payload.nodes {
        writeln!(w, "  {node}")?;
    }
    Ok(())
}
