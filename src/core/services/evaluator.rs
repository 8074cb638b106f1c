//! File evaluator - produces one verdict per workflow file
//!
//! Reads the file, classifies it, and only parses YAML when a push
//! operation was found. Every failure becomes a verdict here.

use std::fs;
use std::path::Path;

use log::debug;
use serde_yaml::Value;
use thiserror::Error;

use super::classifier::PushClassifier;
use super::permissions::find_write_grant;
use crate::core::models::{FileVerdict, VerdictKind};

/// Errors that turn into failing verdicts
#[derive(Debug, Error)]
pub enum EvaluateError {
    /// The file could not be read as UTF-8 text
    #[error("Error reading file: {0}")]
    Read(#[from] std::io::Error),

    /// The file is not valid YAML
    #[error("Failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl EvaluateError {
    /// Verdict kind for this error
    #[must_use]
    pub const fn kind(&self) -> VerdictKind {
        match self {
            Self::Read(_) => VerdictKind::ReadError,
            Self::Parse(_) => VerdictKind::ParseError,
        }
    }
}

impl From<EvaluateError> for FileVerdict {
    fn from(err: EvaluateError) -> Self {
        Self::failed(err.kind(), err.to_string())
    }
}

/// Evaluate the workflow file at `path`
#[must_use]
pub fn evaluate(path: &Path, classifier: &PushClassifier) -> FileVerdict {
    match fs::read_to_string(path) {
        Ok(content) => evaluate_content(&content, classifier),
        Err(e) => {
            debug!("{}: read failed: {e}", path.display());
            EvaluateError::from(e).into()
        },
    }
}

/// Evaluate workflow text that has already been read
#[must_use]
pub fn evaluate_content(content: &str, classifier: &PushClassifier) -> FileVerdict {
    let Some(pattern) = classifier.first_match(content) else {
        return FileVerdict::no_push();
    };
    debug!("push operation matched pattern '{}'", pattern.name());

    let document = match parse(content) {
        Ok(document) => document,
        Err(e) => return e.into(),
    };

    match find_write_grant(&document) {
        Some(scope) => {
            debug!("contents: write granted by {scope}");
            FileVerdict::permitted(scope)
        },
        None => FileVerdict::missing_permission(),
    }
}

/// Parse YAML, skipping a leading byte-order mark
fn parse(content: &str) -> Result<Value, EvaluateError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    Ok(serde_yaml::from_str(content)?)
}
