//! Non-mutating reference membership checks.
//!
//! Before patching a project file it is useful to know whether it references
//! a file at all, and whether the reference carries the expected path. These
//! are substring queries over the document; absence is data, not failure.

use serde::{Deserialize, Serialize};

use crate::document::Document;

/// A membership query: a referenced file name, optionally with the path the
/// reference is expected to carry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCheck {
    /// File name to look for, e.g. `ShortcutSettings.swift`.
    pub name: String,
    /// Full path the reference should carry, if the caller knows it.
    pub expected_path: Option<String>,
}

impl ReferenceCheck {
    /// Check only that `name` is referenced somewhere.
    pub fn present(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expected_path: None,
        }
    }

    /// Check that `name` is referenced and that `path` appears.
    pub fn with_path(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expected_path: Some(path.into()),
        }
    }
}

/// The outcome of one reference check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceStatus {
    /// The queried file name.
    pub name: String,
    /// Whether any line references the name.
    pub present: bool,
    /// Whether the expected path appears; `None` when no path was expected.
    pub path_ok: Option<bool>,
}

/// Run membership queries against a document. Pure; never edits, never errs.
pub fn check_references(document: &Document, checks: &[ReferenceCheck]) -> Vec<ReferenceStatus> {
    checks
        .iter()
        .map(|check| ReferenceStatus {
            name: check.name.clone(),
            present: document.contains(&check.name),
            path_ok: check
                .expected_path
                .as_deref()
                .map(|path| document.contains(path)),
        })
        .collect()
}
