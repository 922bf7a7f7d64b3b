//! The document model: a file as an ordered sequence of lines.
//!
//! Lines keep their original terminators, so serializing an untouched
//! document is byte-identical to the input -- CRLF endings and a missing
//! final newline both survive a round trip. Patching never mutates a
//! document in place; it produces a new one.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::PatchResult;

/// An ordered sequence of text lines, each stored with its terminator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split text content into lines, keeping each line's terminator.
    pub fn parse(content: &str) -> Self {
        Self {
            lines: content.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    /// Build a document from pre-split lines, taken as-is.
    ///
    /// Callers own the terminators here; lines without trailing newlines are
    /// concatenated verbatim on serialization.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Read a whole file into a document.
    pub fn load(path: &Path) -> PatchResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Write the whole document to a file, replacing prior content.
    ///
    /// The serialized form is computed in full before the write starts; the
    /// file is never left holding a partially transformed document by this
    /// process.
    pub fn save(&self, path: &Path) -> PatchResult<()> {
        fs::write(path, self.to_string())?;
        Ok(())
    }

    /// Iterate over the lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns `true` if any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            f.write_str(line)?;
        }
        Ok(())
    }
}
