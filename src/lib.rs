mod cli;
mod env;
mod error;
mod io;

pub use error::GhError;

use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Context, GitHubClient},
    env::Config,
};

const LOG_ENV: &str = "GH_LOG";

pub fn run() -> Result<(), GhError> {
    init_logging();

    let command = cli::parse_command(std::env::args_os())?;
    let config = Config::from_env()?;
    let client = GitHubClient::new(config.api_url.clone(), config.token.clone());
    let context = Context {
        owner: &config.owner,
        repo: &config.repo,
        client: &client,
    };

    tracing::debug!(?command, owner = %config.owner, repo = %config.repo, "running command");

    cli::execute(command, &context, std::io::stdout().lock())?;

    Ok(())
}

/// Logs go to stderr, filtered by `GH_LOG` (defaults to warnings only).
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
