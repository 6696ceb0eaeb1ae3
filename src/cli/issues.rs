//! The `issues` subcommand.

use std::io::Write;

use crate::{
    cli::{Context, forge::TrackerClient},
    io::{self, OPEN, Row},
};

// =============================================================================
// Domain Types
// =============================================================================

/// An issue of the repository.
#[derive(Clone, Debug)]
pub struct Issue {
    pub state: String,
    /// Login of the assignee, if the issue has one.
    pub assignee: Option<String>,
    pub url: String,
    pub title: String,
}

// =============================================================================
// Command Logic
// =============================================================================

/// Prints the open issues of the repository as aligned columns.
pub fn print_open_issues<W: Write>(context: &Context, w: &mut W) -> anyhow::Result<()> {
    let rows = list_open_issues(context.client, context.owner, context.repo)?;

    io::write_rows(w, &rows)?;

    Ok(())
}

/// Fetches the issues of `owner/repo` and keeps the open ones as
/// (assignee, url, title) rows. Unassigned issues get an empty assignee.
pub fn list_open_issues(
    client: &dyn TrackerClient,
    owner: &str,
    repo: &str,
) -> anyhow::Result<Vec<Row>> {
    let issues = client.list_issues(owner, repo)?;
    let fetched = issues.len();
    let rows: Vec<Row> = issues
        .into_iter()
        .filter(|issue| issue.state == OPEN)
        .map(|issue| (issue.assignee.unwrap_or_default(), issue.url, issue.title))
        .collect();

    tracing::debug!(owner, repo, fetched, open = rows.len(), "listed issues");

    Ok(rows)
}
