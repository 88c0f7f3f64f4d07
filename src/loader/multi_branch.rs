//! Multi-branch loader with path deduplication
//!
//! Branches are visited in priority order (see [`sort_by_priority`]). The
//! first branch to list a descriptor path claims it, and no other branch is
//! consulted for that path again.
//!
//! The claim happens on listing, before the blob is fetched or parsed. If the
//! claiming branch's copy is unreadable or malformed the challenge is dropped,
//! even when a lower-priority branch holds a valid copy. This keeps the cost
//! at one fetch per distinct path and fixes which copy surfaces when branches
//! disagree.

use super::priority::sort_by_priority;
use super::{ChallengeLoader, LoadError, assemble};
use crate::challenge::{ChallengeResult, DESCRIPTOR_FILE};
use crate::source::RevisionSource;
use std::collections::HashSet;
use tracing::debug;

/// Loads challenges from every local branch, one result per descriptor path
pub struct MultiBranchLoader<'a, S: RevisionSource + ?Sized> {
    source: &'a S,
    current: Option<String>,
    primary: String,
    descriptor: String,
}

impl<'a, S: RevisionSource + ?Sized> MultiBranchLoader<'a, S> {
    /// Create a loader; `current` is the checked-out branch, if any
    #[must_use]
    pub fn new(source: &'a S, current: Option<String>) -> Self {
        Self {
            source,
            current,
            primary: "main".to_string(),
            descriptor: DESCRIPTOR_FILE.to_string(),
        }
    }

    /// Set the branch that outranks every other branch
    #[must_use]
    pub fn with_primary(mut self, primary: impl Into<String>) -> Self {
        self.primary = primary.into();
        self
    }

    /// Use a different descriptor file name
    #[must_use]
    pub fn with_descriptor(mut self, descriptor: impl Into<String>) -> Self {
        self.descriptor = descriptor.into();
        self
    }
}

impl<S: RevisionSource + ?Sized> ChallengeLoader for MultiBranchLoader<'_, S> {
    fn load_all(&self, genres: &[String]) -> Result<Vec<ChallengeResult>, LoadError> {
        let branches = self.source.list_branches()?;
        let ordered = sort_by_priority(&branches, self.current.as_deref(), &self.primary);

        let mut claimed: HashSet<String> = HashSet::new();
        let mut results = Vec::new();

        for branch in &ordered {
            for genre in genres {
                let files = match self.source.list_files(branch, genre, &self.descriptor) {
                    Ok(files) => files,
                    Err(e) => {
                        debug!(genre = %genre, branch = %branch, "skipping genre: {e}");
                        continue;
                    }
                };

                for file in files {
                    if !claimed.insert(file.clone()) {
                        continue;
                    }

                    let fetched = self.source.read_blob(branch, &file);
                    if let Some(result) = assemble(file, Some(branch.as_str()), fetched) {
                        results.push(result);
                    }
                }
            }
        }

        Ok(results)
    }
}
