//! `biconn stats` — whole-graph connectivity summary.

use std::io::Write;
use std::path::PathBuf;

use biconn_core::GraphSummary;
use clap::Args;
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::input::load_edge_list;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `biconn stats`.
#[derive(Args, Debug, Default)]
pub struct StatsArgs {
    /// Edge list file; `-` or omitted reads stdin.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct StatsOutput {
    #[serde(flatten)]
    summary: GraphSummary,
    duplicate_edges: usize,
}

/// Execute `biconn stats`.
pub fn run_stats(
    args: &StatsArgs,
    config: &AnalysisConfig,
    output: OutputMode,
) -> anyhow::Result<()> {
    let list = load_edge_list(args.file.as_deref(), config.input.duplicate_edges, output)?;

    let payload = StatsOutput {
        summary: GraphSummary::from_store(&list.store),
        duplicate_edges: list.duplicates,
    };

    render_mode(output, &payload, render_stats_text, render_stats_pretty)
}

fn stat_rows(payload: &StatsOutput) -> [(&'static str, usize); 8] {
    let s = &payload.summary;
    [
        ("nodes", s.node_count),
        ("edges", s.edge_count),
        ("connected_components", s.connected_component_count),
        ("biconnected_components", s.biconnected_component_count),
        ("articulation_points", s.articulation_point_count),
        ("bridges", s.bridge_count),
        ("largest_component_edges", s.largest_component_edges),
        ("duplicate_edges", payload.duplicate_edges),
    ]
}

fn render_stats_text(payload: &StatsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    for (key, value) in stat_rows(payload) {
        writeln!(w, "{key}\t{value}")?;
    }
    Ok(())
}

fn render_stats_pretty(payload: &StatsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Graph summary")?;
    for (key, value) in stat_rows(payload) {
        pretty_kv(w, &key.replace('_', " "), value.to_string())?;
    }
    Ok(())
}
