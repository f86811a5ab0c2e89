//! `biconn components` — biconnected components of the graph reachable from
//! the traversal root.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cmd::{names, traverse};
use crate::config::AnalysisConfig;
use crate::input::load_edge_list;
use crate::output::{OutputMode, pretty_section, render_mode};

/// Arguments for `biconn components`.
#[derive(Args, Debug, Default)]
pub struct ComponentsArgs {
    /// Edge list file; `-` or omitted reads stdin.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Node to start the traversal from (default: the source query node).
    #[arg(long, value_name = "NODE")]
    pub root: Option<String>,
}

#[derive(Debug, Serialize)]
struct ComponentsOutput {
    root: Option<String>,
    components: Vec<ComponentEntry>,
}

#[derive(Debug, Serialize)]
struct ComponentEntry {
    id: usize,
    nodes: Vec<String>,
    edges: Vec<(String, String)>,
}

/// Execute `biconn components`.
pub fn run_components(
    args: &ComponentsArgs,
    config: &AnalysisConfig,
    output: OutputMode,
) -> anyhow::Result<()> {
    let list = load_edge_list(args.file.as_deref(), config.input.duplicate_edges, output)?;

    let payload = match traverse(&list, args.root.as_deref(), output)? {
        None => ComponentsOutput {
            root: None,
            components: Vec::new(),
        },
        Some((root, analysis)) => ComponentsOutput {
            root: Some(root),
            components: analysis
                .components()
                .iter()
                .map(|component| ComponentEntry {
                    id: component.id(),
                    nodes: names(&list, component.nodes(), config.output.sort),
                    edges: component
                        .edges()
                        .iter()
                        .map(|&(u, v)| (list.store.node(u).clone(), list.store.node(v).clone()))
                        .collect(),
                })
                .collect(),
        },
    };

    render_mode(output, &payload, render_components_text, render_components_pretty)
}

fn render_components_text(payload: &ComponentsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    for component in &payload.components {
        writeln!(w, "{}", component.nodes.join(" "))?;
    }
    Ok(())
}

fn render_components_pretty(
    payload: &ComponentsOutput,
    w: &mut dyn Write,
) -> std::io::Result<()> {
    let Some(root) = payload.root.as_deref() else {
        writeln!(w, "Graph is empty.")?;
        return Ok(());
    };

    pretty_section(
        w,
        &format!(
            "Biconnected components from {root} ({})",
            payload.components.len()
        ),
    )?;

    for component in &payload.components {
        let kind = if component.edges.len() == 1 {
            " [bridge]"
        } else {
            ""
        };
        writeln!(
            w,
            "\nComponent {} — {} nodes, {} edges{kind}",
            component.id,
            component.nodes.len(),
            component.edges.len()
        )?;
        writeln!(w, "  {}", component.nodes.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: usize, nodes: &[&str], edges: &[(&str, &str)]) -> ComponentEntry {
        ComponentEntry {
            id,
            nodes: nodes.iter().map(|n| (*n).to_string()).collect(),
            edges: edges
                .iter()
                .map(|(u, v)| ((*u).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    #[test]
    fn components_args_parse_root() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: ComponentsArgs,
        }

        let parsed = Wrapper::parse_from(["test", "g.txt", "--root", "x"]);
        assert_eq!(parsed.args.file, Some(PathBuf::from("g.txt")));
        assert_eq!(parsed.args.root.as_deref(), Some("x"));

        let parsed = Wrapper::parse_from(["test"]);
        assert!(parsed.args.root.is_none());
    }

    #[test]
    fn text_is_one_component_per_line() {
        let payload = ComponentsOutput {
            root: Some("a".to_string()),
            components: vec![
                entry(0, &["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]),
                entry(1, &["c", "d"], &[("c", "d")]),
            ],
        };
        let mut out = Vec::new();
        render_components_text(&payload, &mut out).expect("render");
        assert_eq!(String::from_utf8(out).expect("utf8"), "a b c\nc d\n");
    }

    #[test]
    fn pretty_marks_bridges() {
        let payload = ComponentsOutput {
            root: Some("c".to_string()),
            components: vec![entry(0, &["c", "d"], &[("c", "d")])],
        };
        let mut out = Vec::new();
        render_components_pretty(&payload, &mut out).expect("render");

        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.contains("from c (1)"));
        assert!(rendered.contains("Component 0 — 2 nodes, 1 edges [bridge]"));
        assert!(rendered.contains("  c, d"));
    }

    #[test]
    fn pretty_reports_empty_graph() {
        let payload = ComponentsOutput {
            root: None,
            components: Vec::new(),
        };
        let mut out = Vec::new();
        render_components_pretty(&payload, &mut out).expect("render");
        assert_eq!(String::from_utf8(out).expect("utf8"), "Graph is empty.\n");
    }

    #[test]
    fn json_shape_is_stable() {
        let payload = ComponentsOutput {
            root: Some("a".to_string()),
            components: vec![entry(0, &["a", "b"], &[("a", "b")])],
        };
        let json = serde_json::to_value(&payload).expect("serialize");

        assert_eq!(json["root"], "a");
        assert_eq!(json["components"][0]["id"], 0);
        assert_eq!(json["components"][0]["edges"][0][1], "b");
    }
}
