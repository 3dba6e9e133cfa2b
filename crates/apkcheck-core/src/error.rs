//! Error types for APK inspection operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `InspectError`.
pub type Result<T> = std::result::Result<T, InspectError>;

/// Errors that can occur while opening or reading an APK archive.
///
/// Each variant maps to one of the three failure kinds an inspection
/// distinguishes: a missing file, a file that is not a well-formed ZIP
/// container, and every other read failure.
#[derive(Error, Debug)]
pub enum InspectError {
    /// Candidate path does not reference an existing filesystem entry.
    #[error("APK file not found: {path}")]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// File exists but is not a well-formed ZIP container.
    #[error("invalid ZIP/APK format: {reason}")]
    InvalidFormat {
        /// Description from the ZIP reader.
        reason: String,
    },

    /// Any other failure while opening or reading the archive
    /// (permissions, I/O, truncation not caught by ZIP validation).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InspectError {
    /// Returns `true` if this error means the file is not a valid ZIP
    /// container, as opposed to the file being unreadable.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }
}
