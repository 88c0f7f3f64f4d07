//! Configuration module for chaltag
//!
//! The configuration is a YAML document listing the genre directories to
//! scan. It normally lives at `config.yaml` in the repository root.
//!
//! ```yaml
//! genre:
//!   - web
//!   - osint
//!   - crypto
//! ```

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::challenge::DESCRIPTOR_FILE;

/// Default configuration file name, relative to the repository root
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChaltagConfig {
    /// Genre directories to scan, in order
    #[serde(default)]
    pub genre: Vec<String>,

    /// File name identifying a challenge descriptor
    #[serde(default = "default_descriptor")]
    pub descriptor: String,

    /// Branch whose copy wins when the same challenge exists in several branches
    #[serde(default = "default_primary_branch")]
    pub primary_branch: String,
}

fn default_descriptor() -> String {
    DESCRIPTOR_FILE.to_string()
}

fn default_primary_branch() -> String {
    "main".to_string()
}

impl Default for ChaltagConfig {
    fn default() -> Self {
        Self {
            genre: Vec::new(),
            descriptor: default_descriptor(),
            primary_branch: default_primary_branch(),
        }
    }
}

impl ChaltagConfig {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing, unreadable, or malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()).format(FileFormat::Yaml))
            .build()?;

        settings.try_deserialize()
    }

    /// Parse configuration from an in-memory YAML document
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the document is malformed.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(content, FileFormat::Yaml))
            .build()?;

        settings.try_deserialize()
    }
}
