//! Operation: verify that an install order exists without printing it.

use std::path::Path;

use buildorder_resolver::resolver::Resolution;
use buildorder_util::progress::status;

use crate::ops_setup::{self, InputOptions};

/// Outcome of a successful check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    /// Packages that would be built fresh.
    pub fresh: usize,
    /// Installed packages that would be updated at the end.
    pub updates: usize,
}

/// Run the full resolution for the manifest at `manifest_path`.
///
/// Fails with the resolver's diagnostic on the first cycle or undeclared
/// dependency.
pub fn check(manifest_path: &Path, opts: &InputOptions) -> miette::Result<CheckSummary> {
    let inputs = ops_setup::load_inputs(manifest_path, opts)?;
    let mut resolution = Resolution::new(inputs.graph, inputs.installed);
    let mut summary = CheckSummary {
        fresh: 0,
        updates: 0,
    };

    while let Some(item) = resolution.next() {
        let package = item?;
        if resolution.is_emitting_deferred() {
            summary.updates += 1;
        } else {
            summary.fresh += 1;
        }
        tracing::trace!(package = %package, "check: resolved");
    }

    status(
        "Checked",
        &format!(
            "{} packages can be installed ({} updates)",
            summary.fresh + summary.updates,
            summary.updates
        ),
    );
    Ok(summary)
}
