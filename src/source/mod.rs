//! Read-only access to branch snapshots of a revision history
//!
//! The aggregation engine never touches git directly; it talks to a
//! [`RevisionSource`]. [`GitSource`] shells out to the `git` binary and
//! [`MockSource`] serves snapshots from memory.

pub mod git;
pub mod mock;

pub use git::GitSource;
pub use mock::MockSource;

use thiserror::Error;

/// Revision source errors
#[derive(Debug, Error)]
pub enum SourceError {
    /// The underlying tool could not run or refused the query
    #[error("Revision source unavailable: {0}")]
    Unavailable(String),

    /// No branch is checked out
    #[error("No branch is checked out (detached HEAD)")]
    DetachedHead,

    /// The requested blob does not exist in the branch snapshot
    #[error("'{path}' not found in branch '{branch}'")]
    BlobMissing { branch: String, path: String },
}

/// Read-only queries against a branch-addressed file store
///
/// Implementations do not cache: every call may be a fresh round trip.
pub trait RevisionSource {
    /// List local branch names in discovery order.
    ///
    /// # Errors
    /// Returns `SourceError::Unavailable` if branches cannot be enumerated.
    fn list_branches(&self) -> Result<Vec<String>, SourceError>;

    /// Name of the checked-out branch.
    ///
    /// # Errors
    /// Returns `SourceError::Unavailable` if the query fails, or
    /// `SourceError::DetachedHead` if no branch is checked out.
    fn current_branch(&self) -> Result<String, SourceError>;

    /// List every file named `file_name` under `prefix` in `branch`.
    ///
    /// Paths are returned as `prefix/<relative path>`. A prefix that does not
    /// exist in the branch yields an empty list, not an error.
    ///
    /// # Errors
    /// Returns `SourceError::Unavailable` if the source cannot be queried at all.
    fn list_files(
        &self,
        branch: &str,
        prefix: &str,
        file_name: &str,
    ) -> Result<Vec<String>, SourceError>;

    /// Content of `path` as recorded in `branch`.
    ///
    /// # Errors
    /// Returns `SourceError::BlobMissing` if the path is absent from the snapshot,
    /// or `SourceError::Unavailable` if the source cannot be queried.
    fn read_blob(&self, branch: &str, path: &str) -> Result<Vec<u8>, SourceError>;
}

/// Join a listing prefix and a path relative to it
pub(crate) fn join_prefix(prefix: &str, relative: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        relative.to_string()
    } else {
        format!("{prefix}/{relative}")
    }
}

/// Whether the last component of a `/`-separated path equals `file_name`
pub(crate) fn has_file_name(path: &str, file_name: &str) -> bool {
    path.rsplit('/').next() == Some(file_name)
}
