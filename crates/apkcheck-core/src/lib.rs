//! Structural inspection of Android application packages (APKs).
//!
//! `apkcheck-core` opens APK files (ZIP-based containers) read-only and
//! summarizes their structure: total entry count, presence of the
//! required entries (`AndroidManifest.xml`, `classes.dex`), presence of
//! well-known top-level prefixes (`assets/`, `res/`, `META-INF/`), and
//! a preview of the leading entries. Entry payloads are never
//! decompressed or extracted.
//!
//! # Examples
//!
//! ```no_run
//! use apkcheck_core::InspectionConfig;
//! use apkcheck_core::InspectionOutcome;
//! use apkcheck_core::inspect_apk;
//!
//! let config = InspectionConfig::default();
//! let report = inspect_apk("app-release.apk", &config);
//!
//! if let InspectionOutcome::Analyzed(summary) = &report.outcome {
//!     println!(
//!         "{} entries, {}/{} required files present",
//!         summary.total_entries,
//!         summary.required_present(),
//!         summary.required_total
//!     );
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod inspection;

// Re-export main API types
pub use config::InspectionConfig;
pub use error::InspectError;
pub use error::Result;
pub use inspection::ApkSummary;
pub use inspection::InspectionOutcome;
pub use inspection::PathReport;
pub use inspection::PrefixPresence;
pub use inspection::inspect_apk;
pub use inspection::read_entry_names;
pub use inspection::summarize_entries;
