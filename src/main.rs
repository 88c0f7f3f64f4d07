//! Chaltag CLI application entry point
//!
//! Searches challenge descriptors by tag.
//!
//! # Usage
//!
//! ```bash
//! # Interactive search over the working tree
//! chaltag
//!
//! # Print challenges tagged with anything containing "web" or "sql"
//! chaltag web sql
//!
//! # Merge challenges from every local branch
//! chaltag --all-branches web
//!
//! # Read one branch without checking it out
//! chaltag --branch feature/new-pwn pwn
//! ```
//!
//! # Configuration
//!
//! Genres are read from `config.yaml` in the repository root (see
//! `--config` and `-C`).

use chaltag::{
    ChallengeResult, ChaltagError,
    cli::{Cli, SourceMode},
    config::ChaltagConfig,
    loader::{BranchLoader, ChallengeLoader, MultiBranchLoader, WorkingTreeLoader},
    output,
    search::{self, Outcome},
    source::{GitSource, RevisionSource, SourceError},
};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing::debug;

type Result<T> = std::result::Result<T, ChaltagError>;

/// Install the stderr log subscriber
///
/// `CHALTAG_LOG` overrides the level chosen by `--quiet` / `--verbose`.
fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CHALTAG_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

/// Load every challenge from the source selected on the command line
///
/// # Errors
///
/// Returns `ChaltagError` if the working tree cannot be walked or git cannot
/// be run. A detached HEAD is not an error; no branch gets current priority.
fn load_corpus(cli: &Cli, config: &ChaltagConfig) -> Result<Vec<ChallengeResult>> {
    let genres = &config.genre;

    let corpus = match cli.source_mode() {
        SourceMode::WorkingTree => WorkingTreeLoader::new(&cli.repo)
            .with_descriptor(&config.descriptor)
            .load_all(genres)?,
        SourceMode::Branch(branch) => {
            let git = GitSource::new(&cli.repo);
            BranchLoader::new(&git, branch)
                .with_descriptor(&config.descriptor)
                .load_all(genres)?
        }
        SourceMode::AllBranches => {
            let git = GitSource::new(&cli.repo);
            let current = match git.current_branch() {
                Ok(branch) => Some(branch),
                Err(SourceError::DetachedHead) => {
                    debug!("HEAD is detached, no current branch to prefer");
                    None
                }
                Err(e) => return Err(e.into()),
            };
            debug!(current = ?current, primary = %config.primary_branch, "merging all branches");
            MultiBranchLoader::new(&git, current)
                .with_primary(&config.primary_branch)
                .with_descriptor(&config.descriptor)
                .load_all(genres)?
        }
    };

    debug!(count = corpus.len(), "challenges loaded");
    Ok(corpus)
}

/// Print challenges matching any of `tags` as a markdown list
///
/// # Errors
///
/// Returns `ChaltagError` if writing to stdout fails.
fn handle_static_search(corpus: &[ChallengeResult], tags: &[String]) -> Result<()> {
    let results = search::filter_by_tags(corpus, tags);
    let mut stdout = io::stdout().lock();

    if results.is_empty() {
        writeln!(stdout, "{}", output::no_matches_message(tags))?;
        return Ok(());
    }

    output::write_markdown(&mut stdout, &results)?;
    Ok(())
}

/// Run the interactive search screen and print the selection, if any
///
/// # Errors
///
/// Returns `ChaltagError` if raw mode cannot be entered or terminal I/O fails.
fn handle_interactive_search(corpus: &[ChallengeResult]) -> Result<()> {
    match search::run_interactive(corpus)? {
        Outcome::Selected(result) => {
            for line in output::selection_lines(&result) {
                println!("{line}");
            }
        }
        Outcome::Cancelled => {}
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = ChaltagConfig::load(cli.config_path())?;
    let corpus = load_corpus(cli, &config)?;

    if cli.is_interactive() {
        handle_interactive_search(&corpus)
    } else {
        handle_static_search(&corpus, &cli.tags)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.quiet, cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
