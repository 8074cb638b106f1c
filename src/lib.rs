//! pushperm - Check that CI workflows which push to the repository declare
//! `contents: write`
//!
//! Workflows under `.github/workflows` are classified with a list of push
//! patterns. Those that push must grant `contents: write` (or `write-all`) at
//! the workflow level or on one of their jobs.
//!
//! ```
//! use pushperm::core::services::{PushClassifier, evaluate_content};
//!
//! let workflow = "permissions:\n  contents: write\njobs:\n  a:\n    steps:\n      - run: git push\n";
//! assert!(evaluate_content(workflow, &PushClassifier::new()).is_valid());
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod output;
pub mod paths;
pub mod runner;
