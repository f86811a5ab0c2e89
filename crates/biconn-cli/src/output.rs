//! Shared output layer for pretty/text/JSON parity across all CLI commands.
//!
//! Every command handler receives an [`OutputMode`] and formats its output
//! accordingly: framed output for humans, one record per line for pipes,
//! or stable JSON.
//!
//! # Output mode resolution
//!
//! Precedence (highest wins):
//! 1. `--format` / hidden `--json` flag
//! 2. `FORMAT` env var → `"pretty"` | `"text"` | `"json"`
//! 3. Default: [`OutputMode::Pretty`] if stdout is a TTY; [`OutputMode::Text`] if piped.

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};

/// Shared width for human pretty separators.
pub const PRETTY_RULE_WIDTH: usize = 72;

/// Write a horizontal separator used by pretty human output.
pub fn pretty_rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{:-<width$}", "", width = PRETTY_RULE_WIDTH)
}

/// Write a section heading followed by a separator.
pub fn pretty_section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    pretty_rule(w)
}

/// Render a left-aligned key/value line in human output.
pub fn pretty_kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "{:<28} {}", format!("{key}:"), value.as_ref())
}

/// The three output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Human-optimized output (sections, visual framing).
    Pretty,
    /// Plain text, one record per line, for pipes and scripts.
    Text,
    /// Machine-readable JSON.
    Json,
}

impl OutputMode {
    /// Returns `true` if JSON output was requested.
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Core resolution logic, separated from I/O for testability.
fn resolve_output_mode_inner(
    format_flag: Option<OutputMode>,
    json_flag: bool,
    format_env: Option<&str>,
    is_tty: bool,
) -> OutputMode {
    if let Some(mode) = format_flag {
        return mode;
    }

    if json_flag {
        return OutputMode::Json;
    }

    if let Some(val) = format_env {
        match val.to_lowercase().as_str() {
            "json" => return OutputMode::Json,
            "text" => return OutputMode::Text,
            "pretty" => return OutputMode::Pretty,
            _ => {} // unknown value — fall through to TTY detection
        }
    }

    if is_tty {
        OutputMode::Pretty
    } else {
        OutputMode::Text
    }
}

/// Resolve the output mode from CLI flags, environment, and TTY defaults.
pub fn resolve_output_mode(format_flag: Option<OutputMode>, json_flag: bool) -> OutputMode {
    let env_val = std::env::var("FORMAT").ok();
    let is_tty = io::stdout().is_terminal();
    resolve_output_mode_inner(format_flag, json_flag, env_val.as_deref(), is_tty)
}

/// Render a serializable value with explicit pretty/text renderers.
pub fn render_mode<T: Serialize>(
    mode: OutputMode,
    value: &T,
    text_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
    pretty_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut out, value)?;
            writeln!(out)?;
        }
        OutputMode::Text => text_fn(value, &mut out)?,
        OutputMode::Pretty => pretty_fn(value, &mut out)?,
    }
    Ok(())
}

/// A structured error with optional suggestion and error code.
#[derive(Debug, Serialize)]
pub struct CliError {
    /// Human-readable error message.
    pub message: String,
    /// Optional suggestion for how to fix the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Machine-readable error code (e.g. "missing_query_node", "malformed_line").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl CliError {
    /// Create an error with a suggestion and error code.
    pub fn with_details(
        message: impl Into<String>,
        suggestion: impl Into<String>,
        error_code: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            suggestion: Some(suggestion.into()),
            error_code: Some(error_code.into()),
        }
    }
}

/// Convert a [`ParseError`](biconn_core::ParseError) into a [`CliError`].
impl From<&biconn_core::ParseError> for CliError {
    fn from(err: &biconn_core::ParseError) -> Self {
        use biconn_core::ParseError;

        let suggestion = match err {
            ParseError::MalformedLine { .. } => {
                Some("Use one token for a query node or two tokens for an edge.")
            }
            ParseError::ExtraQueryNode { .. } => {
                Some("Only the first two single-token lines name the source and target.")
            }
            ParseError::MissingQueryNode { .. } => {
                Some("Add single-token lines naming the source and then the target node.")
            }
            ParseError::InvalidEdge { .. } => Some("Remove edges that connect a node to itself."),
            ParseError::DuplicateEdge { .. } => Some(
                "Remove the repeated edge or set `duplicate_edges = \"warn\"` under [input].",
            ),
            ParseError::Io(_) => None,
        };

        Self {
            message: err.to_string(),
            suggestion: suggestion.map(str::to_string),
            error_code: Some(err.code().to_string()),
        }
    }
}

/// Render an error to stderr in the requested format.
pub fn render_error(mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    match mode {
        OutputMode::Json => {
            let wrapper = serde_json::json!({
                "error": error,
            });
            serde_json::to_writer_pretty(&mut out, &wrapper)?;
            writeln!(out)?;
        }
        OutputMode::Pretty | OutputMode::Text => {
            writeln!(out, "error: {}", error.message)?;
            if let Some(ref suggestion) = error.suggestion {
                writeln!(out, "  suggestion: {suggestion}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use biconn_core::ParseError;
    use biconn_core::error::QueryRole;

    // ── OutputMode ──────────────────────────────────────────────────────────

    #[test]
    fn output_mode_is_json() {
        assert!(OutputMode::Json.is_json());
        assert!(!OutputMode::Pretty.is_json());
        assert!(!OutputMode::Text.is_json());
    }

    // ── resolution ──────────────────────────────────────────────────────────

    #[test]
    fn format_flag_wins_over_everything() {
        let mode = resolve_output_mode_inner(Some(OutputMode::Text), true, Some("json"), true);
        assert_eq!(mode, OutputMode::Text);
    }

    #[test]
    fn json_flag_wins_over_env() {
        let mode = resolve_output_mode_inner(None, true, Some("pretty"), true);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn env_is_case_insensitive() {
        let mode = resolve_output_mode_inner(None, false, Some("JSON"), true);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn unknown_env_falls_back_to_tty_detection() {
        assert_eq!(
            resolve_output_mode_inner(None, false, Some("yaml"), true),
            OutputMode::Pretty
        );
        assert_eq!(
            resolve_output_mode_inner(None, false, Some("yaml"), false),
            OutputMode::Text
        );
    }

    #[test]
    fn piped_default_is_text() {
        assert_eq!(
            resolve_output_mode_inner(None, false, None, false),
            OutputMode::Text
        );
    }

    // ── helpers ─────────────────────────────────────────────────────────────

    #[test]
    fn pretty_section_writes_heading_and_rule() {
        let mut out = Vec::new();
        pretty_section(&mut out, "Components").expect("write");
        let rendered = String::from_utf8(out).expect("utf8");

        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("Components"));
        assert_eq!(lines.next().map(str::len), Some(PRETTY_RULE_WIDTH));
    }

    #[test]
    fn pretty_kv_aligns_values() {
        let mut out = Vec::new();
        pretty_kv(&mut out, "nodes", "4").expect("write");
        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.starts_with("nodes:"));
        assert!(rendered.trim_end().ends_with(" 4"));
    }

    // ── CliError ────────────────────────────────────────────────────────────

    #[test]
    fn cli_error_from_parse_error_carries_code() {
        let err = ParseError::MissingQueryNode {
            role: QueryRole::Source,
        };
        let cli = CliError::from(&err);

        assert_eq!(cli.message, "missing source query node");
        assert_eq!(cli.error_code.as_deref(), Some("missing_query_node"));
        assert!(cli.suggestion.is_some());
    }

    #[test]
    fn cli_error_serializes_without_empty_fields() {
        let err = ParseError::Io(std::io::Error::other("disk gone"));
        let cli = CliError::from(&err);
        let json = serde_json::to_value(&cli).expect("serialize");

        assert_eq!(json["error_code"], "io");
        assert!(json.get("suggestion").is_none());
    }

    #[test]
    fn with_details_sets_all_fields() {
        let cli = CliError::with_details("boom", "try again", "oops");
        assert_eq!(cli.message, "boom");
        assert_eq!(cli.suggestion.as_deref(), Some("try again"));
        assert_eq!(cli.error_code.as_deref(), Some("oops"));
    }
}
