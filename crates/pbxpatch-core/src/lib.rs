//! Line-level patching for Xcode `project.pbxproj` descriptors.
//!
//! A `project.pbxproj` file is a brace-delimited, line-oriented record
//! format in which every record is keyed by a 24-hex-digit object
//! identifier. This crate edits such files without a grammar: the document
//! is an ordered sequence of lines, and edits are keyed by substring
//! containment. Finding a record means finding the line that carries its
//! identifier; editing a record means rewriting or dropping key/value lines
//! between its opening marker and its closing brace.
//!
//! # Key Types
//!
//! - [`Document`] -- The file as an ordered sequence of lines, terminators preserved
//! - [`BlockSpec`] -- Marker and terminator substrings delimiting one record
//! - [`FieldEdit`] -- A remove-field or replace-value edit descriptor
//! - [`PatchReport`] -- What a patch pass actually did (counts, never errors)
//! - [`ObjectId`] -- A 24-hex-digit pbxproj record identifier
//! - [`ReferenceCheck`] / [`ReferenceStatus`] -- Non-mutating membership queries
//!
//! The patcher itself is [`patch`]: a single linear pass that tracks whether
//! the current line lies inside the target block, drops field lines only
//! inside it, and applies identifier-qualified value substitutions
//! everywhere. [`substitute`] is the unscoped variant for callers with no
//! block to track.

pub mod document;
pub mod edit;
pub mod error;
pub mod ident;
pub mod patcher;
pub mod refs;

// Re-export primary types at crate root for ergonomic imports.
pub use document::Document;
pub use edit::{BlockSpec, FieldEdit, PatchReport};
pub use error::{PatchError, PatchResult};
pub use ident::ObjectId;
pub use patcher::{patch, substitute};
pub use refs::{check_references, ReferenceCheck, ReferenceStatus};
