//! Install-order resolution over a declared dependency graph.
//!
//! The traversal is an iterative depth-first search driven by an explicit
//! stack. Roots are taken in the graph's insertion order; each root is pushed
//! followed by its direct dependencies, so the last-listed dependency is the
//! first one examined. Already-installed packages short-circuit the walk:
//! they are consumed from the installed set the first time they are reached,
//! and any that are also declared for update are held back and emitted last,
//! in alphabetical order.

use std::collections::HashSet;
use std::iter::FusedIterator;

use buildorder_core::dependency::{DependencyGraph, InstalledSet};
use buildorder_core::package::PackageId;

use crate::error::ResolveError;

/// A lazy install order.
///
/// Each call to [`Iterator::next`] advances the traversal just far enough to
/// produce the next package. Dropping the iterator early leaves the rest of
/// the graph unexplored. After an error the iterator is exhausted.
#[derive(Debug)]
pub struct Resolution {
    /// Declared packages not yet resolved or deferred.
    remaining: DependencyGraph,
    /// Installed packages not yet reached by the traversal.
    installed: InstalledSet,
    /// Packages yielded, or known to need no further action.
    completed: HashSet<PackageId>,
    /// Installed packages that are also declared for update.
    deferred: Vec<PackageId>,
    stack: Vec<PackageId>,
    /// Path from the current root to the package being expanded.
    ancestors: Vec<PackageId>,
    /// Sorted deferred packages, once the graph has been drained.
    tail: Option<std::vec::IntoIter<PackageId>>,
    failed: bool,
}

impl Resolution {
    /// Start a resolution that owns its working graph and installed set.
    pub fn new(graph: DependencyGraph, installed: InstalledSet) -> Self {
        Self {
            remaining: graph,
            installed,
            completed: HashSet::new(),
            deferred: Vec::new(),
            stack: Vec::new(),
            ancestors: Vec::new(),
            tail: None,
            failed: false,
        }
    }

    /// Whether the traversal has finished and only deferred updates remain.
    pub fn is_emitting_deferred(&self) -> bool {
        self.tail.is_some()
    }

    /// Seed the stack with the next root and its direct dependencies.
    ///
    /// Returns `false` once every declared package has been handled.
    fn start_next_root(&mut self) -> bool {
        let Some((root, deps)) = self.remaining.first() else {
            return false;
        };
        tracing::trace!(root = %root, "starting traversal");
        self.stack.push(root.clone());
        self.stack.extend(deps.iter().cloned());
        self.ancestors.clear();
        self.ancestors.push(root.clone());
        true
    }

    /// Consume `package` from the installed set if present.
    ///
    /// An installed package is never traversed; if it is also declared it is
    /// held back as an update.
    fn consume_installed(&mut self, package: &PackageId) {
        if !self.installed.remove(package) {
            return;
        }
        if self.remaining.remove(package.as_str()).is_some() {
            tracing::debug!(package = %package, "installed package deferred for update");
            self.deferred.push(package.clone());
        }
        self.completed.insert(package.clone());
    }

    /// Examine the package on top of the stack.
    ///
    /// Returns `Ok(Some(id))` when that package is fully resolved, `Ok(None)`
    /// when the traversal moved on without producing anything.
    fn step(&mut self) -> Result<Option<PackageId>, ResolveError> {
        let Some(current) = self.stack.last().cloned() else {
            return Ok(None);
        };
        tracing::trace!(package = %current, "examining");

        self.consume_installed(&current);
        if self.completed.contains(&current) {
            self.stack.pop();
            return Ok(None);
        }

        let Some(dependencies) = self.remaining.dependencies_of(current.as_str()) else {
            return Err(ResolveError::UnresolvedDependency {
                package: current,
                chain: self.ancestors.clone(),
            });
        };

        // A package whose dependencies were pushed earlier is already the last
        // ancestor when it is examined again.
        if self.ancestors.last() != Some(&current) {
            self.ancestors.push(current.clone());
        }

        let mut pending = Vec::with_capacity(dependencies.len());
        for dependency in dependencies {
            if self.completed.contains(dependency) {
                continue;
            }
            // Installed dependencies stay pending so they are consumed when
            // reached; this is also what breaks cycles through them.
            if !self.installed.contains(dependency) && self.ancestors.contains(dependency) {
                return Err(ResolveError::CircularDependency {
                    package: current,
                    dependency: dependency.clone(),
                    chain: self.ancestors.clone(),
                });
            }
            pending.push(dependency.clone());
        }

        if !pending.is_empty() {
            self.stack.extend(pending);
            return Ok(None);
        }

        self.completed.insert(current.clone());
        self.remaining.remove(current.as_str());
        self.ancestors.pop();
        self.stack.pop();
        Ok(Some(current))
    }

    fn advance(&mut self) -> Option<Result<PackageId, ResolveError>> {
        loop {
            if let Some(tail) = self.tail.as_mut() {
                return tail.next().map(Ok);
            }

            if self.stack.is_empty() && !self.start_next_root() {
                let mut deferred = std::mem::take(&mut self.deferred);
                deferred.sort();
                self.tail = Some(deferred.into_iter());
                continue;
            }

            match self.step() {
                Ok(Some(package)) => {
                    tracing::debug!(package = %package, "resolved");
                    return Some(Ok(package));
                }
                Ok(None) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

impl Iterator for Resolution {
    type Item = Result<PackageId, ResolveError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.advance();
        if let Some(Err(err)) = &item {
            tracing::debug!(error = %err, "resolution aborted");
            self.failed = true;
        }
        item
    }
}

impl FusedIterator for Resolution {}

/// Lazily resolve an install order for `graph`.
///
/// Both inputs are copied; the caller's values are left untouched.
pub fn resolve(graph: &DependencyGraph, installed: &InstalledSet) -> Resolution {
    Resolution::new(graph.clone(), installed.clone())
}

/// Resolve the complete install order, or the first error encountered.
pub fn resolve_all(
    graph: &DependencyGraph,
    installed: &InstalledSet,
) -> Result<Vec<PackageId>, ResolveError> {
    resolve(graph, installed).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildorder_core::dependency::installed_set;

    fn graph(entries: &[(&str, &[&str])]) -> DependencyGraph {
        entries
            .iter()
            .map(|(package, deps)| (*package, deps.to_vec()))
            .collect()
    }

    fn order(entries: &[(&str, &[&str])], installed: &[&str]) -> Result<Vec<String>, ResolveError> {
        let ids = resolve_all(&graph(entries), &installed_set(installed.iter().copied()))?;
        Ok(ids.into_iter().map(|id| id.as_str().to_string()).collect())
    }

    #[test]
    fn linear_chain() {
        let out = order(&[("a", &["b", "c"]), ("b", &["c"]), ("c", &["d"]), ("d", &[])], &[]);
        assert_eq!(out.unwrap(), ["d", "c", "b", "a"]);
    }

    #[test]
    fn last_listed_dependency_is_examined_first() {
        let out = order(&[("a", &["b", "c"]), ("b", &["d"]), ("c", &["b"]), ("d", &[])], &[]);
        assert_eq!(out.unwrap(), ["d", "b", "c", "a"]);
    }

    #[test]
    fn two_cycle_without_installed_fails() {
        let err = order(&[("a", &["b"]), ("b", &["a"])], &[]).unwrap_err();
        assert_eq!(
            err,
            ResolveError::CircularDependency {
                package: "b".into(),
                dependency: "a".into(),
                chain: vec!["a".into(), "b".into()],
            }
        );
    }

    #[test]
    fn three_cycle_without_installed_fails() {
        let err = order(&[("a", &["b"]), ("b", &["c"]), ("c", &["a"])], &[]).unwrap_err();
        assert!(matches!(err, ResolveError::CircularDependency { .. }));
        let chain: Vec<&str> = err.chain().iter().map(PackageId::as_str).collect();
        assert_eq!(chain, ["a", "b", "c"]);
    }

    #[test]
    fn self_dependency_fails() {
        let err = order(&[("a", &["a"])], &[]).unwrap_err();
        assert!(matches!(err, ResolveError::CircularDependency { .. }));
    }

    #[test]
    fn cycle_broken_by_installed_first_member() {
        let out = order(&[("a", &["b"]), ("b", &["a"])], &["a"]);
        assert_eq!(out.unwrap(), ["b", "a"]);
    }

    #[test]
    fn cycle_broken_by_installed_second_member() {
        let out = order(&[("a", &["b"]), ("b", &["a"])], &["b"]);
        assert_eq!(out.unwrap(), ["a", "b"]);
    }

    #[test]
    fn long_cycle_broken_by_installed_member() {
        let out = order(&[("a", &["b"]), ("b", &["c"]), ("c", &["a"])], &["c"]);
        assert_eq!(out.unwrap(), ["b", "a", "c"]);
    }

    #[test]
    fn undeclared_dependency_fails() {
        let err = order(&[("a", &["b"]), ("c", &["d"])], &[]).unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnresolvedDependency {
                package: "b".into(),
                chain: vec!["a".into()],
            }
        );
    }

    #[test]
    fn installed_undeclared_dependency_is_never_yielded() {
        let out = order(&[("a", &["b", "c"]), ("b", &["c"])], &["c"]);
        assert_eq!(out.unwrap(), ["b", "a"]);
    }

    #[test]
    fn deferred_updates_are_sorted() {
        let out = order(
            &[("zeta", &[]), ("app", &["zeta", "alpha"]), ("alpha", &[])],
            &["zeta", "alpha"],
        );
        assert_eq!(out.unwrap(), ["app", "alpha", "zeta"]);
    }

    #[test]
    fn disconnected_roots_follow_insertion_order() {
        let out = order(&[("x", &[]), ("a", &[]), ("m", &["a"])], &[]);
        assert_eq!(out.unwrap(), ["x", "a", "m"]);
    }

    #[test]
    fn empty_graph_yields_nothing() {
        assert!(order(&[], &["a"]).unwrap().is_empty());
    }

    #[test]
    fn yields_before_error_and_then_stops() {
        let mut resolution = resolve(&graph(&[("a", &[]), ("b", &["x"])]), &InstalledSet::new());
        assert_eq!(resolution.next(), Some(Ok("a".into())));
        assert!(matches!(
            resolution.next(),
            Some(Err(ResolveError::UnresolvedDependency { .. }))
        ));
        assert_eq!(resolution.next(), None);
        assert_eq!(resolution.next(), None);
    }

    #[test]
    fn stopping_early_leaves_inputs_untouched() {
        let g = graph(&[("a", &["b"]), ("b", &[])]);
        let installed = installed_set(["b"]);
        let first: Vec<_> = resolve(&g, &installed).take(1).collect();
        assert_eq!(first, vec![Ok("a".into())]);
        assert_eq!(g.len(), 2);
        assert!(installed.contains("b"));
    }

    #[test]
    fn reports_deferred_phase() {
        let mut resolution = resolve(&graph(&[("a", &[]), ("b", &[])]), &installed_set(["b"]));
        assert_eq!(resolution.next(), Some(Ok("a".into())));
        assert!(!resolution.is_emitting_deferred());
        assert_eq!(resolution.next(), Some(Ok("b".into())));
        assert!(resolution.is_emitting_deferred());
        assert_eq!(resolution.next(), None);
    }
}
