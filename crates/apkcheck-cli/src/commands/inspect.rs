//! Inspect command implementation.

use std::path::PathBuf;

use anyhow::Result;
use apkcheck_core::InspectionConfig;
use apkcheck_core::inspect_apk;

use crate::cli::Cli;
use crate::output::OutputFormatter;

/// Candidate paths checked when no APK arguments are given, relative
/// to the working directory and processed in this order.
pub const DEFAULT_APK_PATHS: [&str; 3] = [
    "dist/public/zivora-installable.apk",
    "dist/public/zivora-production.apk",
    "dist/public/zivora-debug.apk",
];

pub fn execute(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = InspectionConfig {
        preview_count: cli.preview,
        ..Default::default()
    };

    let paths: Vec<PathBuf> = if cli.apks.is_empty() {
        DEFAULT_APK_PATHS.iter().map(PathBuf::from).collect()
    } else {
        cli.apks.clone()
    };

    // Every candidate gets inspected and reported, regardless of how
    // the previous ones fared. Per-path failures are report content,
    // so the process itself always completes normally.
    for path in &paths {
        let report = inspect_apk(path, &config);
        formatter.format_path_report(&report)?;
        formatter.format_divider()?;
    }

    Ok(())
}
