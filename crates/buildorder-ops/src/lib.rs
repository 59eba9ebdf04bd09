//! High-level operations behind the `buildorder` commands.

pub mod ops_check;
pub mod ops_order;
pub mod ops_setup;
pub mod ops_tree;
