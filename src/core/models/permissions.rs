//! Permission declarations
//!
//! A workflow may declare `permissions` at its root and inside each job.
//! The declaration is either a single scalar (`write-all`, `read-all`) or a
//! mapping from category to grant level (`contents: write`).

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_yaml::Value;

/// Scalar that grants every category at write level
pub const WRITE_ALL: &str = "write-all";

/// Category that controls pushing to the repository
pub const CONTENTS: &str = "contents";

/// Grant level required for pushing
pub const WRITE: &str = "write";

/// A `permissions` declaration read from a workflow or job
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Permissions {
    /// No declaration, or a value with an unexpected shape
    #[default]
    Absent,
    /// A single scalar such as `write-all` or `read-all`
    Scalar(String),
    /// Per-category grants, e.g. `contents: write`
    Scopes(BTreeMap<String, String>),
}

impl Permissions {
    /// Read the `permissions` key of a mapping node
    ///
    /// Anything that is not a string or a mapping of strings is treated as
    /// absent. Non-string entries inside a mapping are skipped.
    #[must_use]
    pub fn from_node(node: &Value) -> Self {
        node.get("permissions").map_or(Self::Absent, Self::from_value)
    }

    /// Interpret a raw `permissions` value
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::Scalar(s.clone()),
            Value::Mapping(map) => Self::Scopes(
                map.iter()
                    .filter_map(|(k, v)| Some((k.as_str()?.to_string(), v.as_str()?.to_string())))
                    .collect(),
            ),
            Value::Tagged(tagged) => Self::from_value(&tagged.value),
            _ => Self::Absent,
        }
    }

    /// Whether this declaration allows pushing to repository contents
    #[must_use]
    pub fn grants_contents_write(&self) -> bool {
        match self {
            Self::Absent => false,
            Self::Scalar(s) => s == WRITE_ALL,
            Self::Scopes(scopes) => scopes.get(CONTENTS).is_some_and(|level| level == WRITE),
        }
    }
}

/// Where a contents-write grant was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "scope", content = "name", rename_all = "lowercase")]
pub enum PermissionScope {
    /// Root-level `permissions`
    Workflow,
    /// `permissions` of the named job
    Job(String),
}

impl fmt::Display for PermissionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Workflow => write!(f, "workflow"),
            Self::Job(name) => write!(f, "job '{name}'"),
        }
    }
}
