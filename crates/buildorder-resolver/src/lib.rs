//! Install-order resolution: a lazy, stack-based depth-first traversal that
//! short-circuits at installed packages, reports unresolvable cycles and
//! undeclared dependencies, and defers updates of installed packages.

pub mod error;
pub mod graph;
pub mod resolver;

pub use error::ResolveError;
pub use resolver::{resolve, resolve_all, Resolution};
