//! Directory runner - evaluates every workflow file in one directory
//!
//! Files are discovered non-recursively and evaluated one at a time. A file
//! that cannot be read or parsed becomes a failing entry; the run always
//! continues to the next file.

use std::path::{Path, PathBuf};

use glob::Pattern;
use log::{debug, warn};
use walkdir::WalkDir;

use crate::core::models::{FileVerdict, VerdictKind};
use crate::core::services::{EvaluateError, PushClassifier, evaluate};
use crate::output::{FileReport, RunReport};
use crate::paths::WORKFLOW_GLOB;

/// Scans a workflow directory with a given classifier
#[derive(Debug)]
pub struct Runner {
    directory: PathBuf,
    classifier: PushClassifier,
    file_glob: Pattern,
}

impl Runner {
    /// Create a runner for `directory`
    ///
    /// # Panics
    ///
    /// Panics if the built-in workflow glob is invalid (should never happen)
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>, classifier: PushClassifier) -> Self {
        Self {
            directory: directory.into(),
            classifier,
            file_glob: Pattern::new(WORKFLOW_GLOB).expect("workflow glob is valid"),
        }
    }

    /// The directory this runner scans
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Whether a file name looks like a workflow definition
    #[must_use]
    pub fn is_workflow_file(&self, name: &str) -> bool {
        self.file_glob.matches(name)
    }

    /// Evaluate every workflow file and fold the verdicts into a report
    ///
    /// A workflow path that exists but is not a directory yields an empty
    /// report rather than a missing one.
    #[must_use]
    pub fn run(&self) -> RunReport {
        if !self.directory.exists() {
            debug!("{} does not exist", self.directory.display());
            return RunReport::missing(self.directory.clone());
        }

        let files = self
            .discover()
            .into_iter()
            .map(|candidate| {
                let Candidate { name, path, verdict } = candidate;
                let verdict = verdict.unwrap_or_else(|| {
                    debug!("evaluating {name}");
                    evaluate(&path, &self.classifier)
                });
                if !verdict.is_valid() {
                    debug!("{name}: {}", verdict.kind);
                }
                FileReport::new(name, verdict)
            })
            .collect();

        RunReport::new(self.directory.clone(), files)
    }

    /// List workflow files sorted by name
    ///
    /// Entries that could not be inspected while walking carry a ready-made
    /// failing verdict.
    fn discover(&self) -> Vec<Candidate> {
        let mut found = Vec::new();

        for entry in WalkDir::new(&self.directory).min_depth(1).max_depth(1).follow_links(true) {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    let name = entry.file_name().to_string_lossy().into_owned();
                    if self.is_workflow_file(&name) {
                        found.push(Candidate {
                            name,
                            path: entry.into_path(),
                            verdict: None,
                        });
                    }
                },
                Err(e) => {
                    let Some(path) = e.path().map(Path::to_path_buf) else {
                        warn!("skipping unreadable entry: {e}");
                        continue;
                    };
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .filter(|n| self.is_workflow_file(n));
                    let Some(name) = name else {
                        warn!("skipping unreadable entry: {e}");
                        continue;
                    };
                    let message = match e.into_io_error() {
                        Some(io) => EvaluateError::from(io).to_string(),
                        None => "Error reading file: filesystem loop".to_string(),
                    };
                    found.push(Candidate {
                        name,
                        path,
                        verdict: Some(FileVerdict::failed(VerdictKind::ReadError, message)),
                    });
                },
            }
        }

        found.sort_by(|a, b| a.path.cmp(&b.path));
        found
    }
}

/// A discovered workflow file
#[derive(Debug)]
struct Candidate {
    /// Display name (lossy for non-UTF-8 names)
    name: String,
    /// Path used for reading
    path: PathBuf,
    /// Verdict already decided during discovery
    verdict: Option<FileVerdict>,
}
