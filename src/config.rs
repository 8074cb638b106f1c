//! Project configuration
//!
//! Loaded from `.pushperm.toml` in the repository root when present. Every
//! key is optional:
//!
//! ```toml
//! [scan]
//! dir = ".github/workflows"
//!
//! [[pattern]]
//! name = "release-bot"
//! regex = "uses:.*release-bot"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::core::services::{PushClassifier, PushPattern};
use crate::paths;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("failed to parse {}: {source}", path.display())]
    Toml {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// A custom push pattern failed to compile
    #[error("invalid push pattern '{name}': {source}")]
    InvalidPattern {
        /// Pattern name
        name: String,
        /// Underlying error
        source: regex::Error,
    },
}

/// Contents of `.pushperm.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Scan settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Extra push patterns, appended after the built-in ones
    #[serde(default, rename = "pattern")]
    pub patterns: Vec<PatternEntry>,
}

/// `[scan]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Workflow directory, relative to the repository root
    pub dir: Option<PathBuf>,
}

/// A `[[pattern]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternEntry {
    /// Name shown in debug logs
    pub name: String,
    /// Case-insensitive regex matched against the whole file
    pub regex: String,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from an explicit file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Load `.pushperm.toml` under `root`, or defaults if it does not exist
    pub fn discover(root: &Path) -> Result<Self, ConfigError> {
        let path = paths::config_file(root);
        if path.is_file() {
            debug!("loading config from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Workflow directory, honoring `[scan] dir`
    ///
    /// Relative to the working directory, like every path the runner prints.
    #[must_use]
    pub fn workflows_dir(&self) -> PathBuf {
        self.scan.dir.clone().unwrap_or_else(|| PathBuf::from(paths::WORKFLOWS_DIR))
    }

    /// Build a classifier with the built-in patterns plus configured ones
    pub fn classifier(&self) -> Result<PushClassifier, ConfigError> {
        let mut classifier = PushClassifier::new();
        for entry in &self.patterns {
            let pattern = PushPattern::new(entry.name.as_str(), &entry.regex).map_err(|source| {
                ConfigError::InvalidPattern {
                    name: entry.name.clone(),
                    source,
                }
            })?;
            classifier.register(pattern);
        }
        Ok(classifier)
    }
}
