//! Top-level errors and how they are reported.

use std::num::ParseIntError;

/// Everything that can end a `gh` invocation with a non-zero exit code.
#[derive(Debug, thiserror::Error)]
pub enum GhError {
    /// Invalid or missing subcommand. Carries the rendered usage text.
    #[error("{0}")]
    Usage(String),

    #[error("{0} environment variable must be set")]
    MissingEnv(&'static str),

    #[error("{name} environment variable is invalid: {reason}")]
    InvalidEnv { name: &'static str, reason: String },

    #[error("merge: missing pull request number")]
    MissingPrNumber,

    #[error("invalid pull request number \"{text}\": {source}")]
    InvalidPrNumber {
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// A failed remote call or a failed write to stdout.
    #[error("{0:#}")]
    Command(#[from] anyhow::Error),
}
