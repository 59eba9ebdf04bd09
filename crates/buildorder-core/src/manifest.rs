use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::dependency::{DependencyGraph, InstalledSet};
use crate::package::PackageId;

/// The parsed representation of a `Buildorder.toml` file.
///
/// ```toml
/// installed = ["c"]
///
/// [packages]
/// a = ["b", "c"]
/// b = ["c"]
/// ```
///
/// Packages keep their document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Packages already present in the environment.
    #[serde(default)]
    pub installed: Vec<PackageId>,

    /// Packages to install or update, with their direct dependencies.
    #[serde(default)]
    pub packages: DependencyGraph,
}

impl Manifest {
    /// Load and parse a `Buildorder.toml` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = buildorder_util::fs::read_to_string(path).map_err(|e| {
            buildorder_util::errors::BuildorderError::Manifest {
                message: format!("Failed to read {e}"),
            }
        })?;
        content.parse()
    }

    /// A copy of the declared dependency graph.
    pub fn graph(&self) -> DependencyGraph {
        self.packages.clone()
    }

    /// The declared installed packages as a set.
    pub fn installed_set(&self) -> InstalledSet {
        self.installed.iter().cloned().collect()
    }
}

impl FromStr for Manifest {
    type Err = miette::Report;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        toml::from_str(content).map_err(|e| {
            buildorder_util::errors::BuildorderError::Manifest {
                message: format!("Failed to parse Buildorder.toml: {e}"),
            }
            .into()
        })
    }
}
