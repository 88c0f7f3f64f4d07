//! Chaltag - tag search over challenge descriptors
//!
//! This library discovers `challenge.yml` descriptors under a set of genre
//! directories, either in the working tree, in one git branch, or merged
//! across every local branch, and filters them by tag.

use thiserror::Error;

pub mod challenge;
pub mod cli;
pub mod config;
pub mod loader;
pub mod output;
pub mod search;
pub mod source;
pub mod terminal;

pub use challenge::{ChallengeRecord, ChallengeResult};

/// Error enum, contains all fatal failure states of the program
#[derive(Debug, Error)]
pub enum ChaltagError {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Aggregation failed as a whole
    #[error("Load error: {0}")]
    LoadError(#[from] loader::LoadError),
    /// Git could not answer a required query
    #[error("Source error: {0}")]
    SourceError(#[from] source::SourceError),
    /// Interactive search failed
    #[error("Search error: {0}")]
    SearchError(#[from] search::SearchError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
