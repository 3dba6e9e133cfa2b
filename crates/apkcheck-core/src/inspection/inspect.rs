//! APK inspection implementation.

use std::path::Path;

use crate::InspectError;
use crate::InspectionConfig;
use crate::inspection::entries::read_entry_names;
use crate::inspection::report::ApkSummary;
use crate::inspection::report::InspectionOutcome;
use crate::inspection::report::PathReport;
use crate::inspection::report::PrefixPresence;

/// Inspects one candidate APK path and reports what was found.
///
/// A single straight-line pass: existence check, size query, archive
/// open, entry analysis. The first failure ends the pass and is
/// recorded as the report's outcome; failures are never propagated, so
/// a caller can inspect a whole list of candidates and report each one
/// regardless of the others.
///
/// # Examples
///
/// ```no_run
/// use apkcheck_core::InspectionConfig;
/// use apkcheck_core::InspectionOutcome;
/// use apkcheck_core::inspect_apk;
///
/// let config = InspectionConfig::default();
/// let report = inspect_apk("dist/public/app.apk", &config);
///
/// match &report.outcome {
///     InspectionOutcome::Analyzed(summary) => {
///         println!("{} entries", summary.total_entries);
///     }
///     InspectionOutcome::NotFound => println!("no such file"),
///     other => println!("unreadable: {other:?}"),
/// }
/// ```
pub fn inspect_apk<P: AsRef<Path>>(path: P, config: &InspectionConfig) -> PathReport {
    let path = path.as_ref();

    if !path.exists() {
        return PathReport {
            path: path.to_path_buf(),
            size_bytes: None,
            outcome: InspectionOutcome::NotFound,
        };
    }

    let (size_bytes, outcome) = match std::fs::metadata(path) {
        Ok(meta) => (Some(meta.len()), analyze(path, config)),
        Err(err) => (None, InspectionOutcome::ReadError(err.to_string())),
    };

    PathReport {
        path: path.to_path_buf(),
        size_bytes,
        outcome,
    }
}

fn analyze(path: &Path, config: &InspectionConfig) -> InspectionOutcome {
    match read_entry_names(path) {
        Ok(names) => InspectionOutcome::Analyzed(summarize_entries(&names, config)),
        Err(InspectError::InvalidFormat { reason }) => InspectionOutcome::InvalidFormat { reason },
        Err(err) => InspectionOutcome::ReadError(err.to_string()),
    }
}

/// Computes the structural summary of an entry-name list.
///
/// Pure analysis, no I/O: required-name membership, per-prefix
/// any-match presence in policy order, and the first
/// `config.preview_count` names in stored order.
pub fn summarize_entries(names: &[String], config: &InspectionConfig) -> ApkSummary {
    let missing_required = config
        .required_entries
        .iter()
        .filter(|required| !names.iter().any(|name| name == *required))
        .cloned()
        .collect();

    let prefix_presence = config
        .prefix_checks
        .iter()
        .map(|prefix| PrefixPresence {
            prefix: prefix.clone(),
            present: names.iter().any(|name| name.starts_with(prefix)),
        })
        .collect();

    let first_entries = names
        .iter()
        .take(config.preview_count)
        .cloned()
        .collect();

    ApkSummary {
        total_entries: names.len(),
        required_total: config.required_entries.len(),
        missing_required,
        prefix_presence,
        first_entries,
    }
}
