//! Check command implementation.

use std::path::PathBuf;

use miette::Result;

use crate::cli::InputArgs;

pub fn exec(input: InputArgs, config: Option<PathBuf>) -> Result<()> {
    let manifest = super::manifest_path(&input)?;
    let opts = super::input_options(input, config);
    buildorder_ops::ops_check::check(&manifest, &opts)?;
    println!("OK");
    Ok(())
}
