//! Centralized path definitions for pushperm
//!
//! All paths are relative to the current working directory, which is
//! expected to be a repository checkout.
//!
//! ```text
//! repo/
//! ├── .pushperm.toml        # optional configuration
//! └── .github/
//!     └── workflows/
//!         ├── ci.yml        # scanned
//!         ├── release.yaml  # scanned
//!         └── README.md     # ignored
//! ```

use std::path::{Path, PathBuf};

/// Default workflow directory
pub const WORKFLOWS_DIR: &str = ".github/workflows";

/// Optional project configuration file
pub const CONFIG_FILE: &str = ".pushperm.toml";

/// File-name glob for workflow files (`.yml` and `.yaml`)
pub const WORKFLOW_GLOB: &str = "*.y*ml";

/// Get the default config file path under `root`
#[must_use]
pub fn config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
