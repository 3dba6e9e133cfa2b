//! Inspection report types.
//!
//! All report types are plain data computed from one pass over an
//! archive's entry names. Nothing here is persisted or mutated after
//! creation.

use std::path::PathBuf;

/// Presence result for one configured path prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixPresence {
    /// The probed prefix, e.g. `assets/`.
    pub prefix: String,
    /// Whether any entry name starts with the prefix.
    pub present: bool,
}

/// Structural summary of a successfully opened archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApkSummary {
    /// Total number of entries in the archive.
    pub total_entries: usize,

    /// Number of required entry names in the policy.
    pub required_total: usize,

    /// Required entry names absent from the archive, in policy order.
    pub missing_required: Vec<String>,

    /// Per-prefix presence results, in policy order.
    pub prefix_presence: Vec<PrefixPresence>,

    /// The leading entry names, in stored order, capped at the
    /// configured preview count.
    pub first_entries: Vec<String>,
}

impl ApkSummary {
    /// Number of required entry names found in the archive.
    pub fn required_present(&self) -> usize {
        self.required_total - self.missing_required.len()
    }

    /// Returns `true` when every required entry name is present.
    pub fn is_complete(&self) -> bool {
        self.missing_required.is_empty()
    }
}

/// Outcome of inspecting one candidate path.
///
/// Failure outcomes are report content, not propagated errors: a run
/// over several candidate paths records each path's outcome and moves
/// on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectionOutcome {
    /// The path does not reference an existing filesystem entry.
    NotFound,
    /// The file exists but is not a well-formed ZIP container.
    InvalidFormat {
        /// Description from the ZIP reader.
        reason: String,
    },
    /// Some other failure occurred while opening or reading.
    ReadError(String),
    /// The archive opened cleanly and was analyzed.
    Analyzed(ApkSummary),
}

/// Complete per-path inspection report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathReport {
    /// The inspected path, as supplied by the caller.
    pub path: PathBuf,

    /// File size in bytes, when the path exists and its metadata was
    /// readable. Recorded even when the archive later fails to open.
    pub size_bytes: Option<u64>,

    /// What the inspection found.
    pub outcome: InspectionOutcome,
}

impl PathReport {
    /// The per-path success signal: `true` only when the archive was
    /// opened and analyzed.
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, InspectionOutcome::Analyzed(_))
    }

    /// File size in megabytes, when known.
    pub fn size_mb(&self) -> Option<f64> {
        self.size_bytes.map(|b| b as f64 / (1024.0 * 1024.0))
    }
}
