//! CLI argument definitions for buildorder.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use buildorder_core::config::OutputFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "buildorder",
    version,
    about = "Compute a safe install order for a set of packages",
    long_about = "buildorder reads package dependency declarations from Buildorder.toml and \
                  prints an order in which they can be installed or built, skipping packages \
                  that are already installed and updating those last."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this config file instead of ~/.buildorder/config.toml
    #[arg(long, global = true, env = "BUILDORDER_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Manifest location and installed packages, shared by every command.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Path to Buildorder.toml (default: search the current directory and its parents)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Treat a package as already installed (repeatable)
    #[arg(short, long = "installed", value_name = "PACKAGE")]
    pub installed: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the install order
    Order {
        #[command(flatten)]
        input: InputArgs,
        /// Output format (default: from config, else plain)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
        /// Suffix updates of installed packages with "(update)"
        #[arg(long)]
        mark_deferred: bool,
        /// Stop after this many packages
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Verify that an install order exists
    Check {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the dependency tree
    Tree {
        #[command(flatten)]
        input: InputArgs,
        /// Maximum depth
        #[arg(long)]
        depth: Option<usize>,
        /// Explain why a package is included
        #[arg(long, value_name = "PACKAGE", conflicts_with = "inverted")]
        why: Option<String>,
        /// Show what depends on a package
        #[arg(long, value_name = "PACKAGE")]
        inverted: Option<String>,
    },
}

/// `--format` values.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum FormatArg {
    Plain,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Parse command-line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
