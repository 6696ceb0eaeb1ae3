//! Configuration read from the process environment.

use url::Url;

use crate::error::GhError;

pub const OWNER_VAR: &str = "GITHUB_OWNER";
pub const REPO_VAR: &str = "GITHUB_REPO";
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const API_URL_VAR: &str = "GITHUB_API_URL";

const DEFAULT_API_URL: &str = "https://api.github.com";

/// Process-wide settings, read once at startup.
#[derive(Debug)]
pub struct Config {
    /// Owner (user or organization) of the repository.
    pub owner: String,
    /// Name of the repository.
    pub repo: String,
    /// Token sent as a bearer credential, if any.
    pub token: Option<String>,
    /// Base URL of the REST API.
    pub api_url: Url,
}

impl Config {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Config, GhError> {
        Config::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, GhError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let owner = must_get(&lookup, OWNER_VAR)?;
        let repo = must_get(&lookup, REPO_VAR)?;
        let token = lookup(TOKEN_VAR).filter(|token| !token.is_empty());
        let api_url = match lookup(API_URL_VAR).filter(|url| !url.is_empty()) {
            Some(url) => parse_api_url(&url)?,
            None => parse_api_url(DEFAULT_API_URL)?,
        };

        Ok(Config {
            owner,
            repo,
            token,
            api_url,
        })
    }
}

/// Returns the value of `name`, failing if it is unset or empty.
pub fn must_get<F>(lookup: &F, name: &'static str) -> Result<String, GhError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(GhError::MissingEnv(name)),
    }
}

fn parse_api_url(value: &str) -> Result<Url, GhError> {
    let invalid = |reason: String| GhError::InvalidEnv {
        name: API_URL_VAR,
        reason,
    };
    let url = Url::parse(value).map_err(|e| invalid(format!("{e} ({value})")))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid(format!("expected an http(s) URL, found {value}")));
    }

    Ok(url)
}
