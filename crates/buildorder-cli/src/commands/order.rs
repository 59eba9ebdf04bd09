//! Handler for `buildorder order`.

use std::path::PathBuf;

use buildorder_ops::ops_order::{self, OrderOptions};
use miette::Result;

use crate::cli::{FormatArg, InputArgs};

pub fn exec(
    input: InputArgs,
    config: Option<PathBuf>,
    format: Option<FormatArg>,
    mark_deferred: bool,
    limit: Option<usize>,
) -> Result<()> {
    let manifest = super::manifest_path(&input)?;
    let opts = OrderOptions {
        inputs: super::input_options(input, config),
        format: format.map(Into::into),
        mark_deferred,
        limit,
    };
    ops_order::order(&manifest, &opts)
}
