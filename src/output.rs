//! Output formatting for human and JSON modes
//!
//! The run report renders either as one line per workflow plus a summary, or
//! as a single JSON object.

use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::FileVerdict;

/// Marker for a passing workflow
pub const PASS_MARKER: &str = "✅";

/// Marker for a failing workflow
pub const FAIL_MARKER: &str = "❌";

/// Summary printed when every workflow passed
pub const SUCCESS_SUMMARY: &str = "All workflows have appropriate permissions.";

/// Summary printed when at least one workflow failed
pub const FAILURE_SUMMARY: &str = "Some workflows need attention. Please add 'contents: write' \
                                   permission to workflows that perform git push operations.";

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Verdict for one workflow file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// File name within the workflow directory
    pub file: String,
    /// Whether the file passed
    pub valid: bool,
    /// The verdict
    #[serde(flatten)]
    pub verdict: FileVerdict,
}

impl FileReport {
    /// Create a report entry for a file
    #[must_use]
    pub fn new(file: impl Into<String>, verdict: FileVerdict) -> Self {
        Self {
            file: file.into(),
            valid: verdict.is_valid(),
            verdict,
        }
    }

    /// The `<marker> <file>: <message>` line
    #[must_use]
    pub fn line(&self) -> String {
        let marker = if self.valid { PASS_MARKER } else { FAIL_MARKER };
        format!("{marker} {}: {}", self.file, self.verdict.message)
    }
}

/// Result of scanning the workflow directory
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Whether every workflow passed
    pub passed: bool,
    /// Directory that was scanned
    pub directory: PathBuf,
    /// Whether the directory exists
    pub directory_found: bool,
    /// Number of workflow files evaluated
    pub files_checked: usize,
    /// Per-file verdicts, in evaluation order
    pub files: Vec<FileReport>,
}

impl RunReport {
    /// Report for a directory that does not exist
    #[must_use]
    pub const fn missing(directory: PathBuf) -> Self {
        Self {
            passed: true,
            directory,
            directory_found: false,
            files_checked: 0,
            files: Vec::new(),
        }
    }

    /// Report for a scanned directory
    #[must_use]
    pub fn new(directory: PathBuf, files: Vec<FileReport>) -> Self {
        Self {
            passed: files.iter().all(|f| f.valid),
            directory,
            directory_found: true,
            files_checked: files.len(),
            files,
        }
    }

    /// Process exit code for this report
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.passed { 0 } else { 1 }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if !self.directory_found {
            println!("No {} directory found", self.directory.display());
            return;
        }

        for f in &self.files {
            println!("{}", f.line());
        }

        if self.passed {
            println!("\n{}", SUCCESS_SUMMARY.green());
        } else {
            println!("\n{}", FAILURE_SUMMARY.yellow());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
