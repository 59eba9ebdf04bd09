//! buildorder CLI binary.
//!
//! This is the entry point for the `buildorder` command-line tool. It parses
//! arguments with `clap`, initializes logging via `tracing` (on stderr, so
//! stdout carries only the install order), and dispatches to the appropriate
//! command handler.

mod cli;
mod commands;

use miette::Result;

fn main() -> Result<()> {
    let args = cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    commands::dispatch(args)
}
