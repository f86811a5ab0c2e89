//! `biconn cut-vertices` — articulation points and bridges.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cmd::{names, traverse};
use crate::config::AnalysisConfig;
use crate::input::load_edge_list;
use crate::output::{OutputMode, pretty_section, render_mode};

/// Arguments for `biconn cut-vertices`.
#[derive(Args, Debug, Default)]
pub struct CutVerticesArgs {
    /// Edge list file; `-` or omitted reads stdin.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Node to start the traversal from (default: the source query node).
    #[arg(long, value_name = "NODE")]
    pub root: Option<String>,
}

#[derive(Debug, Default, Serialize)]
struct CutVerticesOutput {
    root: Option<String>,
    articulation_points: Vec<String>,
    bridges: Vec<(String, String)>,
}

/// Execute `biconn cut-vertices`.
pub fn run_cut_vertices(
    args: &CutVerticesArgs,
    config: &AnalysisConfig,
    output: OutputMode,
) -> anyhow::Result<()> {
    let list = load_edge_list(args.file.as_deref(), config.input.duplicate_edges, output)?;

    let payload = match traverse(&list, args.root.as_deref(), output)? {
        None => CutVerticesOutput::default(),
        Some((root, analysis)) => {
            let mut bridges: Vec<(String, String)> = analysis
                .bridges()
                .map(|(u, v)| (list.store.node(u).clone(), list.store.node(v).clone()))
                .collect();
            if config.output.sort {
                bridges.sort_unstable();
            }
            CutVerticesOutput {
                root: Some(root),
                articulation_points: names(&list, analysis.articulation_points(), config.output.sort),
                bridges,
            }
        }
    };

    render_mode(output, &payload, render_cut_vertices_text, render_cut_vertices_pretty)
}

fn render_cut_vertices_text(payload: &CutVerticesOutput, w: &mut dyn Write) -> std::io::Result<()> {
    for node in &payload.articulation_points {
        writeln!(w, "{node}")?;
    }
    Ok(())
}

fn render_cut_vertices_pretty(
    payload: &CutVerticesOutput,
    w: &mut dyn Write,
) -> std::io::Result<()> {
    if payload.articulation_points.is_empty() && payload.bridges.is_empty() {
        writeln!(w, "No cut vertices or bridges found.")?;
        return Ok(());
    }

    pretty_section(
        w,
        &format!("Cut vertices ({})", payload.articulation_points.len()),
    )?;
    for node in &payload.articulation_points {
        writeln!(w, "  {node}")?;
    }

    writeln!(w)?;
    pretty_section(w, &format!("Bridges ({})", payload.bridges.len()))?;
    for (u, v) in &payload.bridges {
        writeln!(w, "  {u} — {v}")?;
    }
    Ok(())
}
