//! In-memory revision source for testing

use super::{RevisionSource, SourceError, has_file_name};
use std::cell::Cell;
use std::collections::BTreeMap;

/// Mock revision source that serves predetermined branch snapshots
///
/// Branches keep insertion order; files inside a branch list in path order.
/// Counts blob reads so tests can observe how many fetches a loader made.
#[derive(Debug, Default)]
pub struct MockSource {
    branches: Vec<(String, BTreeMap<String, Vec<u8>>)>,
    current: Option<String>,
    unavailable: bool,
    blob_reads: Cell<usize>,
}

impl MockSource {
    /// Create an empty mock source
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock source whose every query fails
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Add an empty branch, keeping discovery order
    #[must_use]
    pub fn with_branch(mut self, branch: &str) -> Self {
        self.branch_mut(branch);
        self
    }

    /// Add a file to a branch snapshot, creating the branch if needed
    #[must_use]
    pub fn with_file(mut self, branch: &str, path: &str, content: impl Into<Vec<u8>>) -> Self {
        self.branch_mut(branch).insert(path.to_string(), content.into());
        self
    }

    /// Set the checked-out branch
    #[must_use]
    pub fn with_current(mut self, branch: &str) -> Self {
        self.current = Some(branch.to_string());
        self
    }

    /// Number of `read_blob` calls served so far
    #[must_use]
    pub fn blob_reads(&self) -> usize {
        self.blob_reads.get()
    }

    fn branch_mut(&mut self, branch: &str) -> &mut BTreeMap<String, Vec<u8>> {
        let index = match self.branches.iter().position(|(name, _)| name == branch) {
            Some(index) => index,
            None => {
                self.branches.push((branch.to_string(), BTreeMap::new()));
                self.branches.len() - 1
            }
        };
        &mut self.branches[index].1
    }

    fn snapshot(&self, branch: &str) -> Option<&BTreeMap<String, Vec<u8>>> {
        self.branches
            .iter()
            .find(|(name, _)| name == branch)
            .map(|(_, files)| files)
    }

    fn check_available(&self) -> Result<(), SourceError> {
        if self.unavailable {
            Err(SourceError::Unavailable("mock source is offline".into()))
        } else {
            Ok(())
        }
    }
}

impl RevisionSource for MockSource {
    fn list_branches(&self) -> Result<Vec<String>, SourceError> {
        self.check_available()?;
        Ok(self.branches.iter().map(|(name, _)| name.clone()).collect())
    }

    fn current_branch(&self) -> Result<String, SourceError> {
        self.check_available()?;
        self.current.clone().ok_or(SourceError::DetachedHead)
    }

    fn list_files(
        &self,
        branch: &str,
        prefix: &str,
        file_name: &str,
    ) -> Result<Vec<String>, SourceError> {
        self.check_available()?;
        let prefix = format!("{}/", prefix.trim_end_matches('/'));
        Ok(self
            .snapshot(branch)
            .map(|files| {
                files
                    .keys()
                    .filter(|path| path.starts_with(&prefix) && has_file_name(path, file_name))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn read_blob(&self, branch: &str, path: &str) -> Result<Vec<u8>, SourceError> {
        self.check_available()?;
        self.blob_reads.set(self.blob_reads.get() + 1);
        self.snapshot(branch)
            .and_then(|files| files.get(path))
            .cloned()
            .ok_or_else(|| SourceError::BlobMissing {
                branch: branch.to_string(),
                path: path.to_string(),
            })
    }
}
