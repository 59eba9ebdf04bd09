//! Handler for `buildorder tree`.

use std::path::PathBuf;

use buildorder_ops::ops_tree::{self, TreeOptions};
use miette::Result;

use crate::cli::InputArgs;

pub fn exec(
    input: InputArgs,
    config: Option<PathBuf>,
    depth: Option<usize>,
    why: Option<String>,
    inverted: Option<String>,
) -> Result<()> {
    let manifest = super::manifest_path(&input)?;
    let opts = TreeOptions {
        inputs: super::input_options(input, config),
        depth,
        why,
        inverted,
    };
    ops_tree::tree(&manifest, &opts)
}
