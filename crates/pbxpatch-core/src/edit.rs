//! Edit descriptors and the patch report.

use serde::{Deserialize, Serialize};

/// Delimits one record in the file, by substring containment.
///
/// A line containing `marker` opens the block; a later line containing
/// `terminator` closes it. Neither is parsed structurally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSpec {
    /// Substring whose presence in a line signals block entry.
    pub marker: String,
    /// Substring whose presence closes the block.
    pub terminator: String,
}

impl BlockSpec {
    /// The closing token of a brace-delimited pbxproj record.
    pub const DEFAULT_TERMINATOR: &'static str = "};";

    pub fn new(marker: impl Into<String>, terminator: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            terminator: terminator.into(),
        }
    }

    /// Block spec with the standard `};` terminator.
    pub fn braced(marker: impl Into<String>) -> Self {
        Self::new(marker, Self::DEFAULT_TERMINATOR)
    }
}

/// A single field-level edit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldEdit {
    /// Drop the line carrying `field`, but only inside the target block.
    /// The removal also closes the block.
    RemoveField { field: String },

    /// Substitute `old` with `new` on any line that also carries
    /// `identifier`. Applies regardless of block scope: the identifier, not
    /// block membership, is what targets the line.
    ReplaceValue {
        identifier: String,
        old: String,
        new: String,
    },
}

impl FieldEdit {
    pub fn remove_field(field: impl Into<String>) -> Self {
        Self::RemoveField {
            field: field.into(),
        }
    }

    pub fn replace_value(
        identifier: impl Into<String>,
        old: impl Into<String>,
        new: impl Into<String>,
    ) -> Self {
        Self::ReplaceValue {
            identifier: identifier.into(),
            old: old.into(),
            new: new.into(),
        }
    }
}

/// What a patch pass actually did.
///
/// Absent markers and identifiers are reported here as zero counts, never as
/// errors: an edit that finds nothing to do is a no-op, which is what makes
/// re-running an already applied patch safe.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchReport {
    /// Whether a line containing the block marker was seen.
    pub block_entered: bool,
    /// Lines dropped by removal edits.
    pub lines_removed: usize,
    /// Lines that came out of the pass with a value substituted.
    pub lines_replaced: usize,
}

impl PatchReport {
    /// Returns `true` if the pass changed at least one line.
    pub fn changed(&self) -> bool {
        self.lines_removed > 0 || self.lines_replaced > 0
    }
}
