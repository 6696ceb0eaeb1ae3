//! The `merge` subcommand.

use std::{fmt, io::Write};

use crate::{cli::Context, error::GhError};

/// Outcome of a merge as reported by the tracker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeResult {
    /// SHA of the merge commit.
    pub sha: String,
    pub merged: bool,
    pub message: String,
}

impl fmt::Display for MergeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "merged={} sha={} message={:?}",
            self.merged, self.sha, self.message
        )
    }
}

/// Parses a pull request number. The whole text must be an unsigned integer.
pub fn parse_pr_number(text: &str) -> Result<u32, GhError> {
    text.parse().map_err(|source| GhError::InvalidPrNumber {
        text: text.to_string(),
        source,
    })
}

/// Merges pull request `number` with the default commit message and prints the
/// result on one line.
pub fn merge_pull<W: Write>(context: &Context, number: u32, w: &mut W) -> anyhow::Result<()> {
    let result = context
        .client
        .merge_pull_request(context.owner, context.repo, number, "")?;

    tracing::debug!(number, merged = result.merged, "merged pull request");

    writeln!(w, "{result}")?;

    Ok(())
}
