//! Challenge aggregation
//!
//! Three interchangeable strategies discover descriptors and turn them into
//! [`ChallengeResult`]s:
//!
//! - [`WorkingTreeLoader`]: walks the live directory tree
//! - [`BranchLoader`]: reads one branch snapshot
//! - [`MultiBranchLoader`]: merges every local branch, deduplicated by path
//!
//! They differ only in how candidate files are enumerated and fetched. Turning
//! fetched bytes into a result, and warning about the ones that fail, is shared.

pub mod branch;
pub mod multi_branch;
pub mod priority;
pub mod working_tree;

pub use branch::BranchLoader;
pub use multi_branch::MultiBranchLoader;
pub use priority::{BranchPriority, branch_priority, sort_by_priority};
pub use working_tree::WorkingTreeLoader;

use crate::challenge::{ChallengeRecord, ChallengeResult};
use crate::source::SourceError;
use std::fmt::Display;
use thiserror::Error;
use tracing::warn;

/// Errors that abort an aggregation as a whole
///
/// Failures of individual descriptors never surface here.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Walking a genre directory failed
    #[error("Failed to walk directory {genre}: {source}")]
    WalkFailed {
        genre: String,
        #[source]
        source: walkdir::Error,
    },

    /// The revision source could not enumerate branches
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Trait for loading every challenge under a set of genres
pub trait ChallengeLoader {
    /// Discover and load all descriptors under `genres`, in discovery order.
    ///
    /// # Errors
    /// Returns `LoadError` only for systemic failures; unreadable or malformed
    /// descriptors are logged and skipped.
    fn load_all(&self, genres: &[String]) -> Result<Vec<ChallengeResult>, LoadError>;
}

/// Turn fetched descriptor content into a result, warning on failure
pub(crate) fn assemble<E: Display>(
    file_path: String,
    branch: Option<&str>,
    fetched: Result<Vec<u8>, E>,
) -> Option<ChallengeResult> {
    let label = branch.unwrap_or_default();
    let bytes = match fetched {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %file_path, branch = label, "Failed to read {file_path}: {e}");
            return None;
        }
    };

    match ChallengeRecord::from_slice(&bytes) {
        Ok(record) => {
            let branch = branch.map(ToString::to_string);
            Some(ChallengeResult::new(record, file_path, branch))
        }
        Err(e) => {
            warn!(path = %file_path, branch = label, "Failed to parse {file_path}: {e}");
            None
        }
    }
}
