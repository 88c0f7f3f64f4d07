//! Single-branch loader

use super::{ChallengeLoader, LoadError, assemble};
use crate::challenge::{ChallengeResult, DESCRIPTOR_FILE};
use crate::source::RevisionSource;
use tracing::debug;

/// Loads challenges from one branch snapshot
///
/// Every result carries the branch name. Genres that cannot be listed are
/// treated as absent from the branch.
pub struct BranchLoader<'a, S: RevisionSource + ?Sized> {
    source: &'a S,
    branch: String,
    descriptor: String,
}

impl<'a, S: RevisionSource + ?Sized> BranchLoader<'a, S> {
    #[must_use]
    pub fn new(source: &'a S, branch: impl Into<String>) -> Self {
        Self {
            source,
            branch: branch.into(),
            descriptor: DESCRIPTOR_FILE.to_string(),
        }
    }

    /// Use a different descriptor file name
    #[must_use]
    pub fn with_descriptor(mut self, descriptor: impl Into<String>) -> Self {
        self.descriptor = descriptor.into();
        self
    }
}

impl<S: RevisionSource + ?Sized> ChallengeLoader for BranchLoader<'_, S> {
    fn load_all(&self, genres: &[String]) -> Result<Vec<ChallengeResult>, LoadError> {
        let mut results = Vec::new();

        for genre in genres {
            let files = match self.source.list_files(&self.branch, genre, &self.descriptor) {
                Ok(files) => files,
                Err(e) => {
                    debug!(genre = %genre, branch = %self.branch, "skipping genre: {e}");
                    continue;
                }
            };

            for file in files {
                let fetched = self.source.read_blob(&self.branch, &file);
                if let Some(result) = assemble(file, Some(self.branch.as_str()), fetched) {
                    results.push(result);
                }
            }
        }

        Ok(results)
    }
}
