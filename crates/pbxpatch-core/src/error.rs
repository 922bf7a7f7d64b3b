use thiserror::Error;

/// Errors from patch operations.
///
/// Absent markers, terminators, and identifiers are deliberately not errors;
/// those conditions surface as counts in
/// [`PatchReport`](crate::edit::PatchReport) so that re-running an already
/// applied edit stays a silent no-op.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The identifier string is not valid hexadecimal.
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    /// The identifier has the wrong number of hex characters.
    #[error("invalid identifier length: expected {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// I/O error while reading or writing the project file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for patch operations.
pub type PatchResult<T> = Result<T, PatchError>;
