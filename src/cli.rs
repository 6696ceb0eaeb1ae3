mod forge {
    mod github;
    mod http_client;
    #[cfg(test)]
    pub mod mock_client;
    mod tracker_client;

    pub use github::GitHubClient;
    pub use tracker_client::TrackerClient;
}

mod issues;
mod merge;
mod pulls;

use std::{ffi::OsString, io::Write};

use clap::{Args, ColorChoice, CommandFactory, Parser, Subcommand};

pub use forge::{GitHubClient, TrackerClient};

use crate::{error::GhError, io::TabWriter};

// =============================================================================
// CLI Arguments
// =============================================================================

#[derive(Parser)]
#[command(
    name = "gh",
    about = "GitHub from the command line",
    color = ColorChoice::Never,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Print this usage text
    #[arg(short, long)]
    help: bool,

    #[command(subcommand)]
    subcommand: Option<GhCommand>,
}

#[derive(Subcommand)]
pub enum GhCommand {
    /// List open pull requests
    Pulls,

    /// List open issues
    Issues,

    /// Merge a pull request
    Merge(MergeCommandArgs),
}

#[derive(Args)]
pub struct MergeCommandArgs {
    /// Number of the pull request to merge
    #[arg(value_name = "PR-NUMBER", allow_negative_numbers = true)]
    number: Option<String>,
}

// =============================================================================
// Domain Types
// =============================================================================

/// A validated invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pulls,
    Issues,
    Merge { number: u32 },
}

/// What every command runs against: the target repository and the tracker
/// holding it.
pub struct Context<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
    pub client: &'a dyn TrackerClient,
}

// =============================================================================
// Command Logic
// =============================================================================

/// Parses the process arguments, program name included, into a [`Command`].
pub fn parse_command<I, T>(args: I) -> Result<Command, GhError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).map_err(|_| usage())?;

    if cli.help {
        return Err(usage());
    }

    match cli.subcommand {
        None => Err(usage()),
        Some(GhCommand::Pulls) => Ok(Command::Pulls),
        Some(GhCommand::Issues) => Ok(Command::Issues),
        Some(GhCommand::Merge(args)) => match args.number {
            Some(text) => Ok(Command::Merge {
                number: merge::parse_pr_number(&text)?,
            }),
            None => Err(GhError::MissingPrNumber),
        },
    }
}

/// Runs `command` and writes its output to `out`.
///
/// Output is aligned and flushed once after the command succeeded. On error
/// nothing reaches `out`.
pub fn execute<W: Write>(command: Command, context: &Context, out: W) -> anyhow::Result<()> {
    let mut table = TabWriter::new(out);

    match command {
        Command::Pulls => pulls::print_open_pulls(context, &mut table)?,
        Command::Issues => issues::print_open_issues(context, &mut table)?,
        Command::Merge { number } => merge::merge_pull(context, number, &mut table)?,
    }

    table.flush()?;

    Ok(())
}

fn usage() -> GhError {
    GhError::Usage(Cli::command().render_help().to_string())
}
