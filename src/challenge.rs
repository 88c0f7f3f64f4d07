//! Challenge descriptor records
//!
//! A descriptor is a small YAML document carrying a challenge `name` and a
//! list of `tags`. Every other field is ignored.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name of a challenge descriptor
pub const DESCRIPTOR_FILE: &str = "challenge.yml";

/// Errors raised while loading a single descriptor
///
/// These are always per-file: callers log them and move on.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The descriptor could not be read from disk
    #[error("Failed to read challenge file: {0}")]
    Read(#[from] std::io::Error),

    /// The descriptor is not valid YAML or has the wrong shape
    #[error("Failed to parse challenge file: {0}")]
    Malformed(#[from] serde_yaml::Error),
}

/// Name and tags of one challenge, as declared in its descriptor
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChallengeRecord {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ChallengeRecord {
    /// Parse a descriptor from raw bytes
    ///
    /// # Errors
    /// Returns `RecordError::Malformed` if the bytes are not a valid descriptor.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, RecordError> {
        Ok(serde_yaml::from_slice(bytes)?)
    }

    /// Read and parse a descriptor from the filesystem
    ///
    /// # Errors
    /// Returns `RecordError::Read` if the file cannot be read, or
    /// `RecordError::Malformed` if it cannot be parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        let data = fs::read(path)?;
        Self::from_slice(&data)
    }
}

/// A loaded challenge together with where it was found
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeResult {
    pub name: String,
    pub tags: Vec<String>,
    /// Repository-relative path of the descriptor, `/`-separated
    pub file_path: String,
    /// Branch the descriptor was read from; `None` for the working tree
    pub branch: Option<String>,
}

impl ChallengeResult {
    #[must_use]
    pub fn new(
        record: ChallengeRecord,
        file_path: impl Into<String>,
        branch: Option<String>,
    ) -> Self {
        Self {
            name: record.name,
            tags: record.tags,
            file_path: file_path.into(),
            branch,
        }
    }
}
