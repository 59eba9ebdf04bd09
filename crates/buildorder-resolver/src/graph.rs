//! Dependency graph view for display: trees, `--why` paths, inverted trees.

use std::collections::{HashMap, HashSet};
use std::fmt;

use buildorder_core::dependency::{DependencyGraph, InstalledSet};
use buildorder_core::package::PackageId;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Dfs, EdgeRef};
use petgraph::Direction;

/// How a package appears in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Declared under `[packages]` and not installed.
    Declared,
    /// Declared and already installed; will be updated.
    Update,
    /// Only referenced as a dependency, and installed.
    Installed,
    /// Only referenced as a dependency, and not installed.
    Missing,
}

/// A package in the display graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageNode {
    pub id: PackageId,
    pub state: NodeState,
}

impl fmt::Display for PackageNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            NodeState::Declared => write!(f, "{}", self.id),
            NodeState::Update => write!(f, "{} (installed, update)", self.id),
            NodeState::Installed => write!(f, "{} (installed)", self.id),
            NodeState::Missing => write!(f, "{} (missing)", self.id),
        }
    }
}

/// A declared dependency graph backed by petgraph, used for inspection only.
pub struct DependencyTree {
    graph: DiGraph<PackageNode, ()>,
    index: HashMap<PackageId, NodeIndex>,
    roots: Vec<NodeIndex>,
}

impl DependencyTree {
    /// Build the display graph from declared dependencies and installed packages.
    pub fn new(packages: &DependencyGraph, installed: &InstalledSet) -> Self {
        let mut tree = Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
            roots: Vec::new(),
        };

        for (package, _) in packages.iter() {
            let state = if installed.contains(package) {
                NodeState::Update
            } else {
                NodeState::Declared
            };
            tree.add_node(package, state);
        }
        for (package, deps) in packages.iter() {
            let from = tree.index[package];
            for dep in deps {
                let state = if installed.contains(dep) {
                    NodeState::Installed
                } else {
                    NodeState::Missing
                };
                let to = tree.add_node(dep, state);
                if !tree.graph.edges(from).any(|e| e.target() == to) {
                    tree.graph.add_edge(from, to, ());
                }
            }
        }

        tree.roots = tree.compute_roots(packages);
        tree
    }

    /// Add or retrieve a node. An existing node keeps its state.
    fn add_node(&mut self, id: &PackageId, state: NodeState) -> NodeIndex {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(PackageNode {
            id: id.clone(),
            state,
        });
        self.index.insert(id.clone(), idx);
        idx
    }

    /// Declared packages nothing else depends on, in declaration order,
    /// followed by one entry point per component only reachable through a cycle.
    fn compute_roots(&self, packages: &DependencyGraph) -> Vec<NodeIndex> {
        let declared: Vec<NodeIndex> = packages.packages().map(|p| self.index[p]).collect();
        let mut roots: Vec<NodeIndex> = declared
            .iter()
            .copied()
            .filter(|&idx| {
                self.graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .collect();

        let mut reached = HashSet::new();
        for &root in &roots {
            self.mark_reachable(root, &mut reached);
        }
        for idx in declared {
            if !reached.contains(&idx) {
                roots.push(idx);
                self.mark_reachable(idx, &mut reached);
            }
        }
        roots
    }

    fn mark_reachable(&self, start: NodeIndex, reached: &mut HashSet<NodeIndex>) {
        let mut dfs = Dfs::new(&self.graph, start);
        while let Some(idx) = dfs.next(&self.graph) {
            reached.insert(idx);
        }
    }

    /// Look up a package by name.
    pub fn find(&self, package: &str) -> Option<&PackageNode> {
        self.index.get(package).map(|&idx| &self.graph[idx])
    }

    /// Top-level packages the tree is printed from.
    pub fn roots(&self) -> Vec<&PackageNode> {
        self.roots.iter().map(|&idx| &self.graph[idx]).collect()
    }

    fn dependencies_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut deps: Vec<NodeIndex> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| e.target())
            .collect();
        // petgraph lists outgoing edges newest first
        deps.reverse();
        deps
    }

    fn dependents_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut deps: Vec<NodeIndex> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| e.source())
            .collect();
        deps.reverse();
        deps
    }

    /// Print every root with its dependencies.
    pub fn print_tree(&self, max_depth: Option<usize>) -> String {
        let mut output = String::new();
        for &root in &self.roots {
            output.push_str(&format!("{}\n", self.graph[root]));
            let mut visited = HashSet::new();
            visited.insert(root);
            let deps = self.dependencies_of(root);
            let count = deps.len();
            for (i, dep) in deps.into_iter().enumerate() {
                let is_last = i == count - 1;
                self.print_subtree(&mut output, dep, "", is_last, 1, max_depth, &mut visited);
            }
        }
        output
    }

    #[allow(clippy::too_many_arguments)]
    fn print_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        prefix: &str,
        is_last: bool,
        depth: usize,
        max_depth: Option<usize>,
        visited: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let node = &self.graph[idx];
        if visited.contains(&idx) {
            output.push_str(&format!("{prefix}{connector}{node} (cycle)\n"));
            return;
        }
        output.push_str(&format!("{prefix}{connector}{node}\n"));

        if let Some(max) = max_depth {
            if depth >= max {
                return;
            }
        }

        visited.insert(idx);
        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let deps = self.dependencies_of(idx);
        let count = deps.len();
        for (i, child) in deps.into_iter().enumerate() {
            let is_last = i == count - 1;
            self.print_subtree(
                output,
                child,
                &child_prefix,
                is_last,
                depth + 1,
                max_depth,
                visited,
            );
        }
        visited.remove(&idx);
    }

    /// Find the path from a root to `target`.
    pub fn find_path(&self, target: &str) -> Option<Vec<&PackageNode>> {
        let target = *self.index.get(target)?;
        for &root in &self.roots {
            let mut path = Vec::new();
            let mut visited = HashSet::new();
            if self.dfs_path(root, target, &mut path, &mut visited) {
                return Some(path.iter().map(|&idx| &self.graph[idx]).collect());
            }
        }
        None
    }

    fn dfs_path(
        &self,
        current: NodeIndex,
        target: NodeIndex,
        path: &mut Vec<NodeIndex>,
        visited: &mut HashSet<NodeIndex>,
    ) -> bool {
        path.push(current);
        if current == target {
            return true;
        }
        if !visited.insert(current) {
            path.pop();
            return false;
        }
        for dep in self.dependencies_of(current) {
            if self.dfs_path(dep, target, path, visited) {
                return true;
            }
        }
        path.pop();
        false
    }

    /// Print `target` followed by everything that depends on it, transitively.
    pub fn print_inverted_tree(&self, target: &str) -> String {
        let mut output = String::new();
        let Some(&idx) = self.index.get(target) else {
            return output;
        };

        output.push_str(&format!("{}\n", self.graph[idx]));
        let mut visited = HashSet::new();
        visited.insert(idx);

        let dependents = self.dependents_of(idx);
        let count = dependents.len();
        for (i, dep) in dependents.into_iter().enumerate() {
            let is_last = i == count - 1;
            self.print_inverted_subtree(&mut output, dep, "", is_last, &mut visited);
        }
        output
    }

    fn print_inverted_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        prefix: &str,
        is_last: bool,
        visited: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let node = &self.graph[idx];
        output.push_str(&format!("{prefix}{connector}{node}\n"));

        if !visited.insert(idx) {
            return;
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let dependents = self.dependents_of(idx);
        let count = dependents.len();
        for (i, dep) in dependents.into_iter().enumerate() {
            let is_last = i == count - 1;
            self.print_inverted_subtree(output, dep, &child_prefix, is_last, visited);
        }
        visited.remove(&idx);
    }

    /// Number of packages, declared or referenced.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
