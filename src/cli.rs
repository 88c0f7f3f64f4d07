//! Command-line interface definitions and parsing
//!
//! ```text
//! chaltag [OPTIONS] [TAGS]...
//! ```
//!
//! - With no tags, an interactive search screen opens.
//! - With one or more tags, matching challenges are printed as a markdown list.
//!
//! Challenges are read from the working tree by default, from one branch
//! with `--branch`, or merged across every local branch with `--all-branches`.

use crate::config::DEFAULT_CONFIG_FILE;
use clap::Parser;
use std::path::PathBuf;

/// Where challenges are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceMode {
    /// The checked-out directory tree
    WorkingTree,
    /// One branch snapshot
    Branch(String),
    /// Every local branch, deduplicated by path
    AllBranches,
}

/// Search challenges by tag
#[derive(Parser, Debug)]
#[command(name = "chaltag", version, about, long_about = None)]
pub struct Cli {
    /// Tags to search for (omit for interactive search)
    #[arg(value_name = "TAGS")]
    pub tags: Vec<String>,

    /// Search challenges across all local branches
    #[arg(short, long, conflicts_with = "branch")]
    pub all_branches: bool,

    /// Search challenges in a single branch
    #[arg(short, long, value_name = "NAME")]
    pub branch: Option<String>,

    /// Configuration file, relative to the repository root
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Repository root
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub repo: PathBuf,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log skipped genres and git invocations
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Selected challenge source
    #[must_use]
    pub fn source_mode(&self) -> SourceMode {
        if self.all_branches {
            SourceMode::AllBranches
        } else if let Some(branch) = &self.branch {
            SourceMode::Branch(branch.clone())
        } else {
            SourceMode::WorkingTree
        }
    }

    /// Whether to open the interactive search screen
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.tags.is_empty()
    }

    /// Configuration file path resolved against the repository root
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.repo.join(&self.config)
    }
}
