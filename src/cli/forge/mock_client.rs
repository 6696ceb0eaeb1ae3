//! In-memory tracker for testing the commands.

use std::sync::Mutex;

use crate::cli::{
    forge::TrackerClient, issues::Issue, merge::MergeResult, pulls::PullRequest,
};

/// Call record for `merge_pull_request`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCall {
    pub owner: String,
    pub repo: String,
    pub number: u32,
    pub commit_message: String,
}

/// Returns canned pull requests and issues and records merge calls.
///
/// With `error` set, every call fails with that message.
#[derive(Default)]
pub struct MockTrackerClient {
    pub pulls: Vec<PullRequest>,
    pub issues: Vec<Issue>,
    pub merge_result: Option<MergeResult>,
    pub error: Option<String>,
    pub merge_calls: Mutex<Vec<MergeCall>>,
}

impl MockTrackerClient {
    pub fn merge_calls(&self) -> Vec<MergeCall> {
        self.merge_calls.lock().unwrap().clone()
    }

    fn check_error(&self) -> anyhow::Result<()> {
        match &self.error {
            Some(message) => anyhow::bail!("{message}"),
            None => Ok(()),
        }
    }
}

impl TrackerClient for MockTrackerClient {
    fn list_pulls(&self, _owner: &str, _repo: &str) -> anyhow::Result<Vec<PullRequest>> {
        self.check_error()?;

        Ok(self.pulls.clone())
    }

    fn list_issues(&self, _owner: &str, _repo: &str) -> anyhow::Result<Vec<Issue>> {
        self.check_error()?;

        Ok(self.issues.clone())
    }

    fn merge_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u32,
        commit_message: &str,
    ) -> anyhow::Result<MergeResult> {
        self.merge_calls.lock().unwrap().push(MergeCall {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
            commit_message: commit_message.to_string(),
        });
        self.check_error()?;

        Ok(self.merge_result.clone().unwrap_or(MergeResult {
            sha: "0000000".to_string(),
            merged: true,
            message: "Pull Request successfully merged".to_string(),
        }))
    }
}

pub fn pr(state: &str, author: &str, url: &str, title: &str) -> PullRequest {
    PullRequest {
        number: 1,
        state: state.to_string(),
        author: author.to_string(),
        url: url.to_string(),
        title: title.to_string(),
    }
}

pub fn issue(state: &str, assignee: Option<&str>, url: &str, title: &str) -> Issue {
    Issue {
        state: state.to_string(),
        assignee: assignee.map(str::to_string),
        url: url.to_string(),
        title: title.to_string(),
    }
}
