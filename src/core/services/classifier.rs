//! Push-operation classifier
//!
//! Decides from raw workflow text whether the workflow may push commits back
//! to the repository. This is a heuristic over an ordered list of named
//! patterns; it never parses the document.

use regex::{Regex, RegexBuilder};

/// Built-in push patterns, checked in order
const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    ("git-push", r"git\s+push"),
    ("commit-and-push", r"git\s+commit.*&&.*git\s+push"),
    ("auto-commit", r"uses:.*git-auto-commit"),
    ("commit-action", r"uses:.*commit.*action"),
    ("push-action", r"uses:.*push.*action"),
    ("run-git-push", r"run:.*git\s+push"),
];

/// A named, case-insensitive pattern that indicates a push
#[derive(Debug, Clone)]
pub struct PushPattern {
    name: String,
    regex: Regex,
}

impl PushPattern {
    /// Compile a pattern. Matching is case-insensitive.
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            name: name.into(),
            regex,
        })
    }

    /// Pattern name, used in logs
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The source regex
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether the pattern occurs anywhere in `text`
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Ordered set of push patterns
#[derive(Debug, Clone)]
pub struct PushClassifier {
    patterns: Vec<PushPattern>,
}

impl Default for PushClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl PushClassifier {
    /// Create a classifier with the built-in patterns
    ///
    /// # Panics
    ///
    /// Panics if a built-in pattern fails to compile (should never happen)
    #[must_use]
    pub fn new() -> Self {
        Self {
            patterns: BUILTIN_PATTERNS
                .iter()
                .map(|(name, pattern)| {
                    PushPattern::new(*name, pattern).expect("built-in push pattern is valid")
                })
                .collect(),
        }
    }

    /// Create a classifier with no patterns at all
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Append a pattern after the existing ones
    pub fn register(&mut self, pattern: PushPattern) {
        self.patterns.push(pattern);
    }

    /// Registered patterns in match order
    #[must_use]
    pub fn patterns(&self) -> &[PushPattern] {
        &self.patterns
    }

    /// First pattern that matches `text`, if any
    #[must_use]
    pub fn first_match(&self, text: &str) -> Option<&PushPattern> {
        self.patterns.iter().find(|p| p.is_match(text))
    }

    /// Whether `text` contains a push operation
    #[must_use]
    pub fn classify(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }
}
