//! APK inspection without extraction.
//!
//! This module reads archive entry names and computes a structural
//! summary without writing anything to disk or decompressing entry
//! payloads.
//!
//! # Examples
//!
//! ```no_run
//! use apkcheck_core::InspectionConfig;
//! use apkcheck_core::inspect_apk;
//!
//! let config = InspectionConfig::default();
//! let report = inspect_apk("dist/public/app.apk", &config);
//! if report.is_ok() {
//!     println!("{} looks structurally complete", report.path.display());
//! }
//! ```

pub mod entries;
pub mod inspect;
pub mod report;

pub use entries::read_entry_names;
pub use inspect::inspect_apk;
pub use inspect::summarize_entries;
pub use report::ApkSummary;
pub use report::InspectionOutcome;
pub use report::PathReport;
pub use report::PrefixPresence;
