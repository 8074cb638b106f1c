//! Per-file verdicts

use serde::Serialize;

use super::PermissionScope;

/// Why a file passed or failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictKind {
    /// No push operation detected; permissions were not inspected
    NoPush,
    /// Push detected and contents-write is granted
    Permitted,
    /// Push detected but no contents-write grant
    MissingPermission,
    /// The file could not be read
    ReadError,
    /// The file could not be parsed as YAML
    ParseError,
}

impl VerdictKind {
    /// Whether this kind counts as a passing verdict
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::NoPush | Self::Permitted)
    }
}

impl std::fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPush => write!(f, "no_push"),
            Self::Permitted => write!(f, "permitted"),
            Self::MissingPermission => write!(f, "missing_permission"),
            Self::ReadError => write!(f, "read_error"),
            Self::ParseError => write!(f, "parse_error"),
        }
    }
}

/// Result of evaluating one workflow file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileVerdict {
    /// Classification of the result
    pub kind: VerdictKind,
    /// Human-readable explanation
    pub message: String,
    /// Scope that carried the grant, when one was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granted_by: Option<PermissionScope>,
}

impl FileVerdict {
    /// No push operation in the file
    #[must_use]
    pub fn no_push() -> Self {
        Self {
            kind: VerdictKind::NoPush,
            message: "No git push operations found".to_string(),
            granted_by: None,
        }
    }

    /// Push operation with a matching grant
    #[must_use]
    pub fn permitted(scope: PermissionScope) -> Self {
        Self {
            kind: VerdictKind::Permitted,
            message: "Has git push operations and appropriate permissions".to_string(),
            granted_by: Some(scope),
        }
    }

    /// Push operation without any grant
    #[must_use]
    pub fn missing_permission() -> Self {
        Self {
            kind: VerdictKind::MissingPermission,
            message: "Has git push operations but missing 'contents: write' permission"
                .to_string(),
            granted_by: None,
        }
    }

    /// Failure with an explanatory message
    #[must_use]
    pub fn failed(kind: VerdictKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            granted_by: None,
        }
    }

    /// Whether the file passed
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.kind.is_valid()
    }
}
