//! The scoped block patcher.
//!
//! A single linear pass over the document, left to right. A two-state
//! machine tracks whether the current line lies inside the target block:
//! OUTSIDE is the initial state, the first line containing the block marker
//! switches to INSIDE, and either the terminator or a fired removal edit
//! switches back. Removal edits only fire INSIDE; replacement edits are
//! identifier-qualified and fire anywhere. The scope opens at most once per
//! pass, so a later line that happens to contain the marker again is an
//! ordinary line.

use tracing::debug;

use crate::document::Document;
use crate::edit::{BlockSpec, FieldEdit, PatchReport};

/// Whether the current line lies inside the target block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScopeState {
    Outside,
    Inside,
}

/// Apply field edits to a document, honoring block scope for removals.
///
/// Returns the transformed document and a report of what fired. Lines are
/// emitted in input order; the only lines missing from the output are those
/// dropped by removal edits. A marker that never appears means removal edits
/// never fire -- that is a no-op reflected in the report, not an error.
///
/// # Examples
///
/// ```
/// use pbxpatch_core::{patch, BlockSpec, Document, FieldEdit};
///
/// let doc = Document::parse("X /* Settings */ = {\n\tpath = Settings;\n};\n");
/// let block = BlockSpec::braced("Settings */");
/// let edits = [FieldEdit::remove_field("path = Settings;")];
///
/// let (patched, report) = patch(&doc, &block, &edits);
/// assert_eq!(patched.to_string(), "X /* Settings */ = {\n};\n");
/// assert_eq!(report.lines_removed, 1);
/// ```
pub fn patch(document: &Document, block: &BlockSpec, edits: &[FieldEdit]) -> (Document, PatchReport) {
    let mut state = ScopeState::Outside;
    let mut entered = false;
    let mut report = PatchReport::default();
    let mut out: Vec<String> = Vec::with_capacity(document.line_count());

    for line in document.lines() {
        if state == ScopeState::Outside && !entered && line.contains(&block.marker) {
            state = ScopeState::Inside;
            entered = true;
            report.block_entered = true;
            debug!(marker = %block.marker, "entered block");
            out.push(line.to_string());
        } else if state == ScopeState::Inside && matches_removal(edits, line) {
            // Drop the line. The removal also closes the block.
            state = ScopeState::Outside;
            report.lines_removed += 1;
            debug!(line = %line.trim_end(), "removed field line");
        } else if state == ScopeState::Inside && line.contains(&block.terminator) {
            state = ScopeState::Outside;
            debug!(terminator = %block.terminator, "left block");
            out.push(line.to_string());
        } else {
            let rewritten = apply_replacements(line, edits);
            if rewritten != line {
                report.lines_replaced += 1;
            }
            out.push(rewritten);
        }
    }

    (Document::from_lines(out), report)
}

/// Apply only the replacement edits, with no block scoping.
///
/// Equivalent to [`patch`] with a marker that matches nothing, spelled out
/// so callers with no block to track do not have to invent one.
pub fn substitute(document: &Document, edits: &[FieldEdit]) -> (Document, PatchReport) {
    let mut report = PatchReport::default();
    let mut out: Vec<String> = Vec::with_capacity(document.line_count());

    for line in document.lines() {
        let rewritten = apply_replacements(line, edits);
        if rewritten != line {
            report.lines_replaced += 1;
        }
        out.push(rewritten);
    }

    (Document::from_lines(out), report)
}

fn matches_removal(edits: &[FieldEdit], line: &str) -> bool {
    edits.iter().any(|edit| match edit {
        FieldEdit::RemoveField { field } => line.contains(field.as_str()),
        FieldEdit::ReplaceValue { .. } => false,
    })
}

/// Run every qualifying replacement edit over one line.
///
/// An edit qualifies when the line contains both its identifier and its old
/// value; the substitution covers every occurrence of the old value within
/// the line.
fn apply_replacements(line: &str, edits: &[FieldEdit]) -> String {
    let mut current = line.to_string();
    for edit in edits {
        if let FieldEdit::ReplaceValue {
            identifier,
            old,
            new,
        } = edit
        {
            if current.contains(identifier.as_str()) && current.contains(old.as_str()) {
                debug!(identifier = %identifier, "substituted field value");
                current = current.replace(old.as_str(), new.as_str());
            }
        }
    }
    current
}
