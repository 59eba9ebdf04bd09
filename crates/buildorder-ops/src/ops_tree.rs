//! Operation: display the declared dependency tree.

use std::path::Path;

use buildorder_resolver::graph::DependencyTree;

use crate::ops_setup::{self, InputOptions};

/// Options for `buildorder tree`.
#[derive(Debug, Clone, Default)]
pub struct TreeOptions {
    pub inputs: InputOptions,
    /// Maximum tree depth to display.
    pub depth: Option<usize>,
    /// Show the path from a root to this package.
    pub why: Option<String>,
    /// Show everything that depends on this package.
    pub inverted: Option<String>,
}

/// Render the requested view of the dependency graph.
pub fn render_tree(manifest_path: &Path, opts: &TreeOptions) -> miette::Result<String> {
    let inputs = ops_setup::load_inputs(manifest_path, &opts.inputs)?;
    let tree = DependencyTree::new(&inputs.graph, &inputs.installed);

    if let Some(ref target) = opts.why {
        let Some(path) = tree.find_path(target) else {
            return Ok(format!("Package '{target}' not found in the graph.\n"));
        };
        let mut output = format!("Path to {target}:\n");
        for (i, node) in path.iter().enumerate() {
            let indent = "  ".repeat(i);
            output.push_str(&format!("{indent}{node}\n"));
        }
        return Ok(output);
    }

    if let Some(ref target) = opts.inverted {
        let inverted = tree.print_inverted_tree(target);
        if inverted.is_empty() {
            return Ok(format!("Package '{target}' not found in the graph.\n"));
        }
        return Ok(inverted);
    }

    if tree.is_empty() {
        return Ok("No packages.\n".to_string());
    }
    Ok(tree.print_tree(opts.depth))
}

/// Print the dependency tree for the manifest at `manifest_path`.
pub fn tree(manifest_path: &Path, opts: &TreeOptions) -> miette::Result<()> {
    print!("{}", render_tree(manifest_path, opts)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"
installed = ["libc"]

[packages]
app = ["lib"]
lib = ["libc"]
"#;

    fn render(opts: TreeOptions) -> String {
        let tmp = TempDir::new().unwrap();
        let manifest = tmp.path().join("Buildorder.toml");
        std::fs::write(&manifest, MANIFEST).unwrap();
        let config = tmp.path().join("config.toml");
        std::fs::write(&config, "").unwrap();
        let mut opts = opts;
        opts.inputs.config_path = Some(config);
        render_tree(&manifest, &opts).unwrap()
    }

    #[test]
    fn full_tree() {
        let out = render(TreeOptions::default());
        assert_eq!(out, "app\n└── lib\n    └── libc (installed)\n");
    }

    #[test]
    fn why_path() {
        let out = render(TreeOptions {
            why: Some("libc".to_string()),
            ..Default::default()
        });
        assert_eq!(out, "Path to libc:\napp\n  lib\n    libc (installed)\n");
    }

    #[test]
    fn why_unknown() {
        let out = render(TreeOptions {
            why: Some("zlib".to_string()),
            ..Default::default()
        });
        assert!(out.contains("not found"));
    }

    #[test]
    fn inverted() {
        let out = render(TreeOptions {
            inverted: Some("libc".to_string()),
            ..Default::default()
        });
        assert_eq!(out, "libc (installed)\n└── lib\n    └── app\n");
    }
}
