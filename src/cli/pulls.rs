//! The `pulls` subcommand.

use std::io::Write;

use crate::{
    cli::{Context, forge::TrackerClient},
    io::{self, OPEN, Row},
};

// =============================================================================
// Domain Types
// =============================================================================

#[derive(Clone, Debug)]
pub struct PullRequest {
    /// The pull request number (e.g., #42).
    pub number: u32,
    /// The current state (open, closed).
    pub state: String,
    /// The username of the pull request author.
    pub author: String,
    /// The web URL to view this pull request.
    pub url: String,
    /// The pull request title.
    pub title: String,
}

// =============================================================================
// Command Logic
// =============================================================================

/// Prints the open pull requests of the repository as aligned columns.
pub fn print_open_pulls<W: Write>(context: &Context, w: &mut W) -> anyhow::Result<()> {
    let rows = list_open_pulls(context.client, context.owner, context.repo)?;

    io::write_rows(w, &rows)?;

    Ok(())
}

/// Fetches the pull requests of `owner/repo` and keeps the open ones as
/// (author, url, title) rows, in the order the tracker returned them.
pub fn list_open_pulls(
    client: &dyn TrackerClient,
    owner: &str,
    repo: &str,
) -> anyhow::Result<Vec<Row>> {
    let prs = client.list_pulls(owner, repo)?;
    let fetched = prs.len();
    let rows: Vec<Row> = prs
        .into_iter()
        .inspect(|pr| {
            tracing::trace!(number = pr.number, state = %pr.state, "fetched pull request");
        })
        .filter(|pr| pr.state == OPEN)
        .map(|pr| (pr.author, pr.url, pr.title))
        .collect();

    tracing::debug!(owner, repo, fetched, open = rows.len(), "listed pull requests");

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::forge::mock_client::{MockTrackerClient, pr};

    #[test]
    fn test_keeps_only_open_pulls() {
        let client = MockTrackerClient {
            pulls: vec![
                pr("open", "alice", "u1", "t1"),
                pr("closed", "bob", "u2", "t2"),
            ],
            ..Default::default()
        };
        let context = Context {
            owner: "acme",
            repo: "widgets",
            client: &client,
        };
        let mut out = Vec::new();

        print_open_pulls(&context, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "alice\tu1\tt1\n");
    }

    #[test]
    fn test_preserves_tracker_order() {
        let client = MockTrackerClient {
            pulls: vec![
                pr("open", "zed", "u3", "c"),
                pr("closed", "x", "u9", "gone"),
                pr("open", "amy", "u1", "a"),
                pr("open", "mia", "u2", "b"),
            ],
            ..Default::default()
        };

        let rows = list_open_pulls(&client, "acme", "widgets").unwrap();
        let authors: Vec<&str> = rows.iter().map(|(author, _, _)| author.as_str()).collect();

        assert_eq!(authors, ["zed", "amy", "mia"]);
    }

    #[test]
    fn test_no_open_pulls_prints_nothing() {
        let client = MockTrackerClient {
            pulls: vec![pr("closed", "bob", "u2", "t2")],
            ..Default::default()
        };

        let rows = list_open_pulls(&client, "acme", "widgets").unwrap();

        assert!(rows.is_empty());
    }

    #[test]
    fn test_propagates_tracker_error() {
        let client = MockTrackerClient {
            error: Some("GET https://api.github.com/repos/acme/widgets/pulls: 404 Not Found".into()),
            ..Default::default()
        };

        let err = list_open_pulls(&client, "acme", "widgets").unwrap_err();

        assert_eq!(
            err.to_string(),
            "GET https://api.github.com/repos/acme/widgets/pulls: 404 Not Found"
        );
    }
}
