//! Input loading shared by `order`, `check`, and `tree`.

use std::path::{Path, PathBuf};

use buildorder_core::config::GlobalConfig;
use buildorder_core::dependency::{DependencyGraph, InstalledSet};
use buildorder_core::manifest::Manifest;
use buildorder_core::package::PackageId;
use buildorder_util::errors::{BuildorderError, BuildorderResult};

/// Where to read inputs from, common to every operation.
#[derive(Debug, Clone, Default)]
pub struct InputOptions {
    /// Explicit config file; `None` means `~/.buildorder/config.toml`.
    pub config_path: Option<PathBuf>,
    /// Extra packages to treat as installed.
    pub installed: Vec<PackageId>,
}

/// Everything an operation needs to run the resolver.
pub struct ResolveInputs {
    pub config: GlobalConfig,
    pub graph: DependencyGraph,
    /// Manifest, config and command-line installed packages combined.
    pub installed: InstalledSet,
}

/// Load the global configuration.
///
/// An explicit path must exist and parse. The default location is
/// best-effort: problems are logged and defaults are used.
pub fn load_config(config_path: Option<&Path>) -> BuildorderResult<GlobalConfig> {
    match config_path {
        Some(path) => {
            if !path.is_file() {
                return Err(BuildorderError::Config {
                    message: format!("{} does not exist", path.display()),
                }
                .into());
            }
            GlobalConfig::load_from(path)
        }
        None => match GlobalConfig::load() {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("Failed to load global config, using defaults: {e}");
                Ok(GlobalConfig::default())
            }
        },
    }
}

/// Read the manifest and config and merge the installed sets.
pub fn load_inputs(manifest_path: &Path, opts: &InputOptions) -> BuildorderResult<ResolveInputs> {
    let manifest = Manifest::from_path(manifest_path)?;
    let config = load_config(opts.config_path.as_deref())?;

    let mut installed = manifest.installed_set();
    installed.extend(config.resolve.installed.iter().cloned());
    installed.extend(opts.installed.iter().cloned());

    tracing::debug!(
        manifest = %manifest_path.display(),
        packages = manifest.packages.len(),
        installed = installed.len(),
        "loaded inputs"
    );

    Ok(ResolveInputs {
        config,
        graph: manifest.packages,
        installed,
    })
}
