use crate::cli::{issues::Issue, merge::MergeResult, pulls::PullRequest};

/// The remote service holding a repository's pull requests and issues.
pub trait TrackerClient {
    /// Fetches the pull requests of `owner/repo`, in the order the service
    /// returns them.
    fn list_pulls(&self, owner: &str, repo: &str) -> anyhow::Result<Vec<PullRequest>>;

    /// Fetches the issues of `owner/repo`. Pull requests are not included.
    fn list_issues(&self, owner: &str, repo: &str) -> anyhow::Result<Vec<Issue>>;

    /// Merges pull request `number`. An empty `commit_message` lets the
    /// service pick its default message.
    fn merge_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u32,
        commit_message: &str,
    ) -> anyhow::Result<MergeResult>;
}
