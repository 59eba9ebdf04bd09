use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for buildorder operations outside the resolver itself.
#[derive(Debug, Error, Diagnostic)]
pub enum BuildorderError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed package manifest (e.g. Buildorder.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(
        code(buildorder::manifest),
        help("Check your Buildorder.toml for syntax errors")
    )]
    Manifest { message: String },

    /// Malformed global configuration.
    #[error("Config error: {message}")]
    #[diagnostic(
        code(buildorder::config),
        help("Check ~/.buildorder/config.toml or the file passed with --config")
    )]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type BuildorderResult<T> = miette::Result<T>;
