//! Core data types for buildorder.
//!
//! This crate defines the values the resolver works on: package identifiers,
//! the insertion-ordered dependency graph, the installed set, the
//! `Buildorder.toml` manifest, and the global user configuration.
//!
//! This crate is intentionally free of resolution logic.

/// File name searched for when no manifest path is given.
pub const MANIFEST_FILE_NAME: &str = "Buildorder.toml";

pub mod config;
pub mod dependency;
pub mod manifest;
pub mod package;
