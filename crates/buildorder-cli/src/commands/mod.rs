//! Command dispatch and handler modules.

mod check;
mod order;
mod tree;

use std::path::PathBuf;

use buildorder_core::MANIFEST_FILE_NAME;
use buildorder_ops::ops_setup::InputOptions;
use buildorder_util::errors::BuildorderError;
use buildorder_util::fs::find_ancestor_with;
use miette::Result;

use crate::cli::{Cli, Command, InputArgs};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Order {
            input,
            format,
            mark_deferred,
            limit,
        } => order::exec(input, cli.config, format, mark_deferred, limit),
        Command::Check { input } => check::exec(input, cli.config),
        Command::Tree {
            input,
            depth,
            why,
            inverted,
        } => tree::exec(input, cli.config, depth, why, inverted),
    }
}

/// The manifest to read: the explicit `--manifest`, or the nearest
/// `Buildorder.toml` at or above the current directory.
fn manifest_path(input: &InputArgs) -> Result<PathBuf> {
    if let Some(path) = &input.manifest {
        return Ok(path.clone());
    }
    let cwd = std::env::current_dir().map_err(BuildorderError::Io)?;
    let root = find_ancestor_with(&cwd, MANIFEST_FILE_NAME).ok_or_else(|| {
        BuildorderError::Manifest {
            message: format!(
                "Could not find {MANIFEST_FILE_NAME} in this directory or any parent"
            ),
        }
    })?;
    Ok(root.join(MANIFEST_FILE_NAME))
}

fn input_options(input: InputArgs, config: Option<PathBuf>) -> InputOptions {
    InputOptions {
        config_path: config,
        installed: input.installed.into_iter().map(Into::into).collect(),
    }
}
