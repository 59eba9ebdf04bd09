//! Errors raised while computing an install order.

use buildorder_core::package::{format_chain, PackageId};
use miette::Diagnostic;
use thiserror::Error;

/// Why an install order could not be completed.
///
/// Both kinds abort the resolution. Packages yielded before the error are
/// still a valid install prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ResolveError {
    /// A dependency is neither installed nor declared.
    #[error(
        "package `{package}` is required but is neither installed nor declared \
         (dependency chain: {})",
        format_chain(.chain)
    )]
    #[diagnostic(
        code(buildorder::resolve::unresolved),
        help("declare the package under [packages] or list it as installed")
    )]
    UnresolvedDependency {
        package: PackageId,
        /// Packages traversed from the root down to the dependent.
        chain: Vec<PackageId>,
    },

    /// A cycle in which no member is installed.
    #[error(
        "circular dependency: `{package}` depends on `{dependency}`, which in turn \
         depends on `{package}` (dependency chain: {})",
        format_chain(.chain)
    )]
    #[diagnostic(
        code(buildorder::resolve::circular),
        help("install one package of the cycle first, or mark it as installed")
    )]
    CircularDependency {
        package: PackageId,
        dependency: PackageId,
        /// Packages traversed from the root down to `package`.
        chain: Vec<PackageId>,
    },
}

impl ResolveError {
    /// The dependency chain that led to the failure.
    pub fn chain(&self) -> &[PackageId] {
        match self {
            Self::UnresolvedDependency { chain, .. } | Self::CircularDependency { chain, .. } => {
                chain
            }
        }
    }
}
