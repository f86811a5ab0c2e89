#![forbid(unsafe_code)]

mod cmd;
mod config;
mod input;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use output::OutputMode;
use std::env;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "biconn: biconnected components and acyclic path queries",
    long_about = None
)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (pretty, text, json). Defaults to pretty on a TTY.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Config file (default: ./biconn.toml if present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        output::resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Queries",
        about = "List nodes that lie on some acyclic path between the query nodes",
        after_help = "EXAMPLES:\n    # Query nodes are the first two single-token lines\n    biconn paths graph.txt\n\n    # Read from stdin, emit JSON\n    cat graph.txt | biconn paths --json"
    )]
    Paths(cmd::paths::PathsArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "List biconnected components",
        after_help = "EXAMPLES:\n    biconn components graph.txt\n    biconn components graph.txt --root hub"
    )]
    Components(cmd::components::ComponentsArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "List articulation points and bridges",
        after_help = "EXAMPLES:\n    biconn cut-vertices graph.txt --format text"
    )]
    CutVertices(cmd::cut_vertices::CutVerticesArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Summarize connectivity of the whole graph"
    )]
    Stats(cmd::stats::StatsArgs),

    #[command(
        next_help_heading = "Shell",
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    biconn completions zsh > ~/.zfunc/_biconn"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose || env::var("DEBUG").is_ok() {
        "biconn=debug,info"
    } else {
        "biconn=info,warn"
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("BICONN_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let format = env::var("BICONN_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_ansi(false)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let working_dir = env::current_dir()?;
    let config = config::load_config(cli.config.as_deref(), &working_dir)?;
    let output = cli.output_mode();
    debug!(?output, "resolved output mode");

    match cli.command {
        Commands::Paths(ref args) => cmd::paths::run_paths(args, &config, output),
        Commands::Components(ref args) => {
            cmd::components::run_components(args, &config, output)
        }
        Commands::CutVertices(ref args) => {
            cmd::cut_vertices::run_cut_vertices(args, &config, output)
        }
        Commands::Stats(ref args) => cmd::stats::run_stats(args, &config, output),
        Commands::Completions(args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}
