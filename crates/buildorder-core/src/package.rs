use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Name identifying exactly one package node in a dependency graph.
///
/// Ordering is plain string ordering; it decides the order in which
/// already-installed packages scheduled for update are emitted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PackageId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for PackageId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for PackageId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PackageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Render a dependency chain as `a -> b -> c`.
pub fn format_chain(chain: &[PackageId]) -> String {
    chain
        .iter()
        .map(PackageId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}
