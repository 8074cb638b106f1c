//! Permission extractor - finds a contents-write grant in a parsed workflow
//!
//! Pure logic over `serde_yaml::Value`. Unexpected shapes (non-mapping root,
//! non-mapping `jobs`, non-mapping job bodies) grant nothing and never fail.

use serde_yaml::Value;

use crate::core::models::{PermissionScope, Permissions};

/// Find where contents-write is granted
///
/// The root declaration is checked first, then each job under `jobs` in
/// document order. A grant on any single job is accepted, even if another
/// job performs the push.
#[must_use]
pub fn find_write_grant(document: &Value) -> Option<PermissionScope> {
    if Permissions::from_node(document).grants_contents_write() {
        return Some(PermissionScope::Workflow);
    }

    jobs(document)
        .find(|(_, job)| Permissions::from_node(job).grants_contents_write())
        .map(|(name, _)| PermissionScope::Job(name))
}

/// Whether the workflow or any of its jobs grants contents-write
#[must_use]
pub fn has_write_permission(document: &Value) -> bool {
    find_write_grant(document).is_some()
}

/// Named jobs of a workflow; empty when `jobs` is missing or not a mapping
fn jobs(document: &Value) -> impl Iterator<Item = (String, &Value)> {
    document
        .get("jobs")
        .and_then(Value::as_mapping)
        .into_iter()
        .flat_map(|map| map.iter().map(|(name, job)| (job_name(name), job)))
}

fn job_name(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}
