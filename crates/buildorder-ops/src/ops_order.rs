//! Operation: print the install order.
//!
//! Plain output streams each package as soon as the resolver produces it, so
//! a consumer reading line by line can start installing before resolution
//! finishes. JSON output is emitted once, after the full order is known.

use std::io::Write;
use std::path::Path;

use buildorder_core::config::OutputFormat;
use buildorder_core::package::PackageId;
use buildorder_resolver::resolver::Resolution;
use buildorder_util::errors::BuildorderError;
use buildorder_util::progress::{status, status_info, status_warn};
use serde::Serialize;

use crate::ops_setup::{self, InputOptions};

/// Options for `buildorder order`.
#[derive(Debug, Clone, Default)]
pub struct OrderOptions {
    pub inputs: InputOptions,
    /// Overrides `[output] format` from the config.
    pub format: Option<OutputFormat>,
    /// Suffix updates of installed packages with ` (update)`.
    pub mark_deferred: bool,
    /// Stop after this many packages. The resolver is advanced one step past
    /// the limit to tell a cut-off order from one that is exactly this long.
    pub limit: Option<usize>,
}

/// One entry of the install order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledPackage {
    pub name: PackageId,
    /// Already installed; emitted in the trailing update block.
    pub deferred: bool,
}

/// Resolve the manifest at `manifest_path` and print the install order to stdout.
pub fn order(manifest_path: &Path, opts: &OrderOptions) -> miette::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_order(manifest_path, opts, &mut out).map(|_| ())
}

/// Resolve and write the install order to `out`, returning what was written.
pub fn write_order(
    manifest_path: &Path,
    opts: &OrderOptions,
    out: &mut impl Write,
) -> miette::Result<Vec<ScheduledPackage>> {
    let inputs = ops_setup::load_inputs(manifest_path, &opts.inputs)?;
    let format = opts.format.unwrap_or(inputs.config.output.format);
    let mark_deferred = opts.mark_deferred || inputs.config.output.mark_deferred;

    let mut resolution = Resolution::new(inputs.graph, inputs.installed);
    let mut scheduled = Vec::new();

    let mut stopped_early = false;
    while let Some(item) = resolution.next() {
        if opts.limit.is_some_and(|limit| scheduled.len() >= limit) {
            stopped_early = true;
            break;
        }
        let name = match item {
            Ok(name) => name,
            Err(err) => {
                if !scheduled.is_empty() {
                    status_warn(
                        "Incomplete",
                        &format!("{} packages resolved before the failure", scheduled.len()),
                    );
                }
                return Err(err.into());
            }
        };
        let package = ScheduledPackage {
            name,
            deferred: resolution.is_emitting_deferred(),
        };
        if format == OutputFormat::Plain {
            write_plain(out, &package, mark_deferred)?;
        }
        scheduled.push(package);
    }

    if format == OutputFormat::Json {
        let json =
            serde_json::to_string_pretty(&scheduled).map_err(|e| BuildorderError::Generic {
                message: format!("Failed to serialize install order: {e}"),
            })?;
        writeln!(out, "{json}").map_err(BuildorderError::Io)?;
    }

    if stopped_early {
        status_info("Stopped", &format!("after {} packages (--limit)", scheduled.len()));
    } else {
        let updates = scheduled.iter().filter(|p| p.deferred).count();
        status(
            "Resolved",
            &format!("{} packages ({updates} updates)", scheduled.len()),
        );
    }

    Ok(scheduled)
}

fn write_plain(
    out: &mut impl Write,
    package: &ScheduledPackage,
    mark_deferred: bool,
) -> miette::Result<()> {
    let written = if mark_deferred && package.deferred {
        writeln!(out, "{} (update)", package.name)
    } else {
        writeln!(out, "{}", package.name)
    };
    written
        .and_then(|_| out.flush())
        .map_err(|e| BuildorderError::Io(e).into())
}
