//! Git-backed revision source
//!
//! Every query spawns one `git` process in the repository directory. Branch
//! snapshots are read with `<branch>:<path>` revision syntax, so the working
//! tree is never modified.

use super::{RevisionSource, SourceError, has_file_name, join_prefix};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// Revision source that queries a local git repository
#[derive(Debug, Clone)]
pub struct GitSource {
    repo: PathBuf,
}

impl GitSource {
    /// Create a source for the repository containing `repo`
    #[must_use]
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self { repo: repo.into() }
    }

    /// Repository directory git is run in
    #[must_use]
    pub fn repo(&self) -> &Path {
        &self.repo
    }

    /// Run git with `args`, failing only if the process cannot be spawned
    fn run(&self, args: &[&str]) -> Result<Output, SourceError> {
        debug!(args = ?args, repo = %self.repo.display(), "running git");
        Command::new("git")
            .args(args)
            .current_dir(&self.repo)
            .output()
            .map_err(|e| SourceError::Unavailable(format!("failed to run git: {e}")))
    }

    /// Run git with `args` and return stdout, treating a non-zero exit as unavailability
    fn run_checked(&self, args: &[&str]) -> Result<String, SourceError> {
        let output = self.run(args)?;
        if !output.status.success() {
            return Err(SourceError::Unavailable(format!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

impl RevisionSource for GitSource {
    fn list_branches(&self) -> Result<Vec<String>, SourceError> {
        // for-each-ref, unlike `git branch`, never lists a detached HEAD entry
        let stdout =
            self.run_checked(&["for-each-ref", "--format=%(refname:short)", "refs/heads"])?;
        Ok(non_empty_lines(&stdout).map(ToString::to_string).collect())
    }

    fn current_branch(&self) -> Result<String, SourceError> {
        let stdout = self.run_checked(&["branch", "--show-current"])?;
        let branch = stdout.trim();
        if branch.is_empty() {
            return Err(SourceError::DetachedHead);
        }
        Ok(branch.to_string())
    }

    fn list_files(
        &self,
        branch: &str,
        prefix: &str,
        file_name: &str,
    ) -> Result<Vec<String>, SourceError> {
        let tree = format!("{branch}:{}", prefix.trim_end_matches('/'));
        // -z keeps non-ASCII names verbatim instead of quoting them
        let output = self.run(&["ls-tree", "-r", "-z", "--name-only", &tree])?;

        // A prefix missing from this snapshot makes ls-tree exit non-zero.
        if !output.status.success() {
            debug!(branch, prefix, "prefix not present in branch");
            return Ok(Vec::new());
        }

        Ok(output
            .stdout
            .split(|&b| b == 0)
            .filter(|name| !name.is_empty())
            .map(String::from_utf8_lossy)
            .filter(|name| has_file_name(name, file_name))
            .map(|name| join_prefix(prefix, &name))
            .collect())
    }

    fn read_blob(&self, branch: &str, path: &str) -> Result<Vec<u8>, SourceError> {
        let output = self.run(&["show", &format!("{branch}:{path}")])?;
        if !output.status.success() {
            return Err(SourceError::BlobMissing {
                branch: branch.to_string(),
                path: path.to_string(),
            });
        }
        Ok(output.stdout)
    }
}
