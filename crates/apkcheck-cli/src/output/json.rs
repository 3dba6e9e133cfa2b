//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use apkcheck_core::InspectionOutcome;
use apkcheck_core::PathReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_path_report(&self, report: &PathReport) -> Result<()> {
        #[derive(Serialize)]
        struct PrefixOutput {
            prefix: String,
            present: bool,
        }

        #[derive(Serialize)]
        struct InspectOutput {
            path: String,
            size_bytes: u64,
            total_entries: usize,
            required_present: usize,
            required_total: usize,
            missing_files: Vec<String>,
            directories: Vec<PrefixOutput>,
            first_entries: Vec<String>,
        }

        let path = report.path.display().to_string();

        match &report.outcome {
            InspectionOutcome::Analyzed(summary) => {
                let data = InspectOutput {
                    path,
                    size_bytes: report.size_bytes.unwrap_or_default(),
                    total_entries: summary.total_entries,
                    required_present: summary.required_present(),
                    required_total: summary.required_total,
                    missing_files: summary.missing_required.clone(),
                    directories: summary
                        .prefix_presence
                        .iter()
                        .map(|p| PrefixOutput {
                            prefix: p.prefix.clone(),
                            present: p.present,
                        })
                        .collect(),
                    first_entries: summary.first_entries.clone(),
                };

                let output = JsonOutput::success("inspect", data);
                Self::output(&output)
            }
            InspectionOutcome::NotFound => {
                let output =
                    JsonOutput::<()>::error("inspect", format!("APK file not found: {path}"));
                Self::output(&output)
            }
            InspectionOutcome::InvalidFormat { reason } => {
                let output = JsonOutput::<()>::error(
                    "inspect",
                    format!("invalid ZIP/APK format: {path}: {reason}"),
                );
                Self::output(&output)
            }
            InspectionOutcome::ReadError(message) => {
                let output = JsonOutput::<()>::error(
                    "inspect",
                    format!("error reading APK: {path}: {message}"),
                );
                Self::output(&output)
            }
        }
    }

    fn format_divider(&self) -> Result<()> {
        // One JSON document per path, no separators.
        Ok(())
    }
}
