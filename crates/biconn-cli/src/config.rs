//! Optional `biconn.toml` configuration.
//!
//! ```toml
//! [input]
//! duplicate_edges = "warn"   # or "error"
//!
//! [output]
//! sort = true                # sort node names in command output
//! ```
//!
//! Lookup: `--config <path>` if given (must exist), else `biconn.toml` in
//! the working directory if present, else defaults.

use anyhow::{Context, Result};
use biconn_core::edge_list::DuplicatePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "biconn.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub duplicate_edges: DuplicatePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub sort: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            sort: default_true(),
        }
    }
}

const fn default_true() -> bool {
    true
}

/// Load the effective configuration.
///
/// # Errors
///
/// Returns an error if an explicit `--config` path is missing, or if a
/// config file cannot be read or parsed.
pub fn load_config(explicit: Option<&Path>, working_dir: &Path) -> Result<AnalysisConfig> {
    let path: PathBuf = match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            path.to_path_buf()
        }
        None => {
            let path = working_dir.join(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                return Ok(AnalysisConfig::default());
            }
            path
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config = toml::from_str::<AnalysisConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
