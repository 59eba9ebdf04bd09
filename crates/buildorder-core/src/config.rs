use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::package::PackageId;

/// Global user configuration loaded from `~/.buildorder/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub resolve: ResolveConfig,
}

/// Output settings from `[output]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Suffix packages coming from the update tail with ` (update)`.
    #[serde(default, rename = "mark-deferred")]
    pub mark_deferred: bool,
}

/// How `buildorder order` prints the install order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One package per line, printed as soon as it is resolved.
    #[default]
    Plain,
    /// A single JSON array printed once resolution finishes.
    Json,
}

/// Resolution settings from `[resolve]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveConfig {
    /// Packages always treated as already installed, e.g. system-provided ones.
    #[serde(default)]
    pub installed: Vec<PackageId>,
}

impl GlobalConfig {
    /// Load the global configuration from `~/.buildorder/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = buildorder_util::fs::read_to_string(path).map_err(|e| {
            buildorder_util::errors::BuildorderError::Config {
                message: format!("Failed to read global config {e}"),
            }
        })?;
        toml::from_str(&content).map_err(|e| {
            buildorder_util::errors::BuildorderError::Config {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the buildorder data directory (`~/.buildorder/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".buildorder")
}
