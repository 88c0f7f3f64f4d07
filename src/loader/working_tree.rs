//! Working-tree loader

use super::{ChallengeLoader, LoadError, assemble};
use crate::challenge::{ChallengeResult, DESCRIPTOR_FILE};
use crate::source::join_prefix;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Loads challenges from the checked-out directory tree
///
/// Results carry no branch.
#[derive(Debug, Clone)]
pub struct WorkingTreeLoader {
    root: PathBuf,
    descriptor: String,
}

impl WorkingTreeLoader {
    /// Create a loader rooted at `root`, looking for `challenge.yml`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
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

/// `/`-separated form of a path relative to a walk root
fn slash_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

impl ChallengeLoader for WorkingTreeLoader {
    fn load_all(&self, genres: &[String]) -> Result<Vec<ChallengeResult>, LoadError> {
        let mut results = Vec::new();

        for genre in genres {
            let genre_dir = self.root.join(genre);
            if !genre_dir.exists() {
                debug!(genre = %genre, "genre directory missing, skipping");
                continue;
            }

            for entry in WalkDir::new(&genre_dir).sort_by_file_name() {
                let entry = entry.map_err(|source| LoadError::WalkFailed {
                    genre: genre.clone(),
                    source,
                })?;

                if entry.file_type().is_dir() || entry.file_name() != self.descriptor.as_str() {
                    continue;
                }

                let relative = entry.path().strip_prefix(&genre_dir).unwrap_or(entry.path());
                let file_path = join_prefix(genre, &slash_path(relative));

                if let Some(result) = assemble(file_path, None, fs::read(entry.path())) {
                    results.push(result);
                }
            }
        }

        Ok(results)
    }
}
