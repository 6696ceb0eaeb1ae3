use anyhow::Context;
use reqwest::blocking::{RequestBuilder, Response};
use serde::{Deserialize, de::DeserializeOwned};
use url::Url;

use crate::cli::{
    forge::{
        TrackerClient,
        http_client::{HttpClient, WithAuth},
    },
    issues::Issue,
    merge::MergeResult,
    pulls::PullRequest,
};

const AUTH_SCHEME: &str = "Bearer";
const ACCEPT: &str = "application/vnd.github+json";

// =============================================================================
// Domain Types
// =============================================================================

pub struct GitHubClient {
    api_url: Url,
    token: Option<String>,
    http_client: HttpClient,
}

impl GitHubClient {
    pub fn new(api_url: Url, token: Option<String>) -> Self {
        GitHubClient {
            api_url,
            token,
            http_client: HttpClient::new(),
        }
    }

    /// Builds `{api_url}/repos/{owner}/{repo}/{path...}`. Segments are
    /// percent-encoded.
    fn repo_url(&self, owner: &str, repo: &str, path: &[&str]) -> anyhow::Result<Url> {
        let mut url = self.api_url.clone();

        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("{} cannot be used as a base URL", self.api_url))?
            .pop_if_empty()
            .extend(["repos", owner, repo])
            .extend(path);

        Ok(url)
    }

    fn send<T: DeserializeOwned>(
        &self,
        method: &str,
        url: &Url,
        request: RequestBuilder,
    ) -> anyhow::Result<T> {
        tracing::debug!(method, %url, "sending request");

        let response = request
            .with_auth(self.token.as_deref(), AUTH_SCHEME)
            .header("Accept", ACCEPT)
            .send()?;

        tracing::debug!(method, %url, status = %response.status(), "received response");

        parse_response(method, url, response)
    }
}

/// GitHub API response for pull requests.
/// https://docs.github.com/en/rest/pulls/pulls
#[derive(Debug, Deserialize)]
struct GitHubPullRequest {
    number: u32,
    state: String,
    title: String,
    html_url: String,
    user: Option<GitHubUser>,
}

impl From<GitHubPullRequest> for PullRequest {
    fn from(pr: GitHubPullRequest) -> Self {
        PullRequest {
            number: pr.number,
            state: pr.state,
            author: pr.user.map(|u| u.login).unwrap_or_default(),
            url: pr.html_url,
            title: pr.title,
        }
    }
}

/// GitHub API response for issues.
/// https://docs.github.com/en/rest/issues/issues
#[derive(Debug, Deserialize)]
struct GitHubIssue {
    state: String,
    title: String,
    html_url: String,
    assignee: Option<GitHubUser>,
    pull_request: Option<GitHubIssuePrField>,
}

impl From<GitHubIssue> for Issue {
    fn from(issue: GitHubIssue) -> Self {
        Issue {
            state: issue.state,
            assignee: issue.assignee.map(|u| u.login),
            url: issue.html_url,
            title: issue.title,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GitHubUser {
    login: String,
}

#[derive(Debug, Deserialize)]
struct GitHubIssuePrField {}

/// https://docs.github.com/en/rest/pulls/pulls#merge-a-pull-request
#[derive(Debug, Deserialize)]
struct GitHubMergeResult {
    sha: Option<String>,
    merged: bool,
    message: String,
}

impl From<GitHubMergeResult> for MergeResult {
    fn from(result: GitHubMergeResult) -> Self {
        MergeResult {
            sha: result.sha.unwrap_or_default(),
            merged: result.merged,
            message: result.message,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GitHubErrorBody {
    message: String,
}

// =============================================================================
// Command Logic
// =============================================================================

impl TrackerClient for GitHubClient {
    fn list_pulls(&self, owner: &str, repo: &str) -> anyhow::Result<Vec<PullRequest>> {
        let url = self.repo_url(owner, repo, &["pulls"])?;
        let prs: Vec<GitHubPullRequest> = self.send("GET", &url, self.http_client.get(&url))?;

        Ok(prs.into_iter().map(Into::into).collect())
    }

    fn list_issues(&self, owner: &str, repo: &str) -> anyhow::Result<Vec<Issue>> {
        let url = self.repo_url(owner, repo, &["issues"])?;
        let issues: Vec<GitHubIssue> = self.send("GET", &url, self.http_client.get(&url))?;

        Ok(issues
            .into_iter()
            .filter_map(|i| match i.pull_request {
                Some(_) => None,
                None => Some(i.into()),
            })
            .collect())
    }

    fn merge_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u32,
        commit_message: &str,
    ) -> anyhow::Result<MergeResult> {
        let number = number.to_string();
        let url = self.repo_url(owner, repo, &["pulls", &number, "merge"])?;
        let request_body = if commit_message.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::json!({ "commit_message": commit_message })
        };
        let result: GitHubMergeResult =
            self.send("PUT", &url, self.http_client.put(&url).json(&request_body))?;

        Ok(result.into())
    }
}

// =============================================================================
// Private Helpers
// =============================================================================

fn parse_response<T: DeserializeOwned>(
    method: &str,
    url: &Url,
    response: Response,
) -> anyhow::Result<T> {
    let status = response.status();

    if !status.is_success() {
        let message = response
            .json::<GitHubErrorBody>()
            .map(|body| body.message)
            .unwrap_or_default();

        let error = format!("{method} {url}: {status} {message}");

        anyhow::bail!("{}", error.trim_end());
    }

    response
        .json()
        .with_context(|| format!("{method} {url}: failed to parse response"))
}
