//! Shared utilities for buildorder.
//!
//! This crate provides cross-cutting concerns used by the other buildorder
//! crates: the unified error type, filesystem helpers, and Cargo-style
//! terminal status lines.

pub mod errors;
pub mod fs;
pub mod progress;
