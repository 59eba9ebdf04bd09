use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::package::PackageId;

/// Packages already present in the environment before resolution starts.
pub type InstalledSet = HashSet<PackageId>;

/// Declared dependencies: package → its direct dependencies, in listed order.
///
/// Keys are the packages the caller wants installed or updated. Iteration
/// follows insertion order, which decides which disconnected part of the
/// graph is traversed first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    packages: IndexMap<PackageId, Vec<PackageId>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `package` with its direct dependencies.
    ///
    /// Re-declaring a package replaces its dependency list but keeps its
    /// original position.
    pub fn insert<I, D>(&mut self, package: impl Into<PackageId>, dependencies: I)
    where
        I: IntoIterator<Item = D>,
        D: Into<PackageId>,
    {
        self.packages.insert(
            package.into(),
            dependencies.into_iter().map(Into::into).collect(),
        );
    }

    /// Direct dependencies of `package`, or `None` if it is not declared.
    pub fn dependencies_of(&self, package: &str) -> Option<&[PackageId]> {
        self.packages.get(package).map(Vec::as_slice)
    }

    pub fn contains(&self, package: &str) -> bool {
        self.packages.contains_key(package)
    }

    /// The earliest-inserted package still present.
    pub fn first(&self) -> Option<(&PackageId, &[PackageId])> {
        self.packages
            .first()
            .map(|(package, deps)| (package, deps.as_slice()))
    }

    /// Remove `package`, keeping the relative order of the remaining keys.
    pub fn remove(&mut self, package: &str) -> Option<Vec<PackageId>> {
        self.packages.shift_remove(package)
    }

    pub fn packages(&self) -> impl Iterator<Item = &PackageId> + '_ {
        self.packages.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PackageId, &[PackageId])> + '_ {
        self.packages
            .iter()
            .map(|(package, deps)| (package, deps.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl<P, D> FromIterator<(P, Vec<D>)> for DependencyGraph
where
    P: Into<PackageId>,
    D: Into<PackageId>,
{
    fn from_iter<T: IntoIterator<Item = (P, Vec<D>)>>(iter: T) -> Self {
        let mut graph = Self::new();
        for (package, deps) in iter {
            graph.insert(package, deps);
        }
        graph
    }
}

/// Build an [`InstalledSet`] from anything that yields package names.
pub fn installed_set<I, P>(packages: I) -> InstalledSet
where
    I: IntoIterator<Item = P>,
    P: Into<PackageId>,
{
    packages.into_iter().map(Into::into).collect()
}
