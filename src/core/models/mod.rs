//! Domain models
//!
//! - Permissions: a `permissions` declaration and where it grants access
//! - Verdict: the outcome of evaluating one workflow file

mod permissions;
mod verdict;

pub use permissions::{CONTENTS, PermissionScope, Permissions, WRITE, WRITE_ALL};
pub use verdict::{FileVerdict, VerdictKind};
