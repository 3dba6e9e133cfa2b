//! Human-readable report formatter.
//!
//! Reproduces the reference report layout line for line, including the
//! capitalized `True`/`False` presence labels.

use super::formatter::OutputFormatter;
use anyhow::Result;
use apkcheck_core::ApkSummary;
use apkcheck_core::InspectionOutcome;
use apkcheck_core::PathReport;
use console::Term;

const DIVIDER_WIDTH: usize = 50;

pub struct HumanFormatter {
    preview: usize,
    term: Term,
}

impl HumanFormatter {
    pub fn new(preview: usize) -> Self {
        Self {
            preview,
            term: Term::stdout(),
        }
    }

    fn presence_label(present: bool) -> &'static str {
        if present { "True" } else { "False" }
    }

    fn write_size(&self, report: &PathReport) {
        if let Some(mb) = report.size_mb() {
            let _ = self.term.write_line(&format!("📊 File size: {mb:.1} MB"));
        }
    }

    fn write_summary(&self, summary: &ApkSummary) {
        let _ = self
            .term
            .write_line(&format!("📋 Total files in APK: {}", summary.total_entries));
        let _ = self.term.write_line(&format!(
            "✅ Required files present: {}/{}",
            summary.required_present(),
            summary.required_total
        ));

        if !summary.missing_required.is_empty() {
            let _ = self.term.write_line(&format!(
                "❌ Missing files: {}",
                summary.missing_required.join(", ")
            ));
        }

        for presence in &summary.prefix_presence {
            let _ = self.term.write_line(&format!(
                "📁 Has {}: {}",
                presence.prefix,
                Self::presence_label(presence.present)
            ));
        }

        let _ = self
            .term
            .write_line(&format!("📄 First {} files:", self.preview));
        for (index, name) in summary.first_entries.iter().enumerate() {
            let _ = self.term.write_line(&format!("   {}. {name}", index + 1));
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_path_report(&self, report: &PathReport) -> Result<()> {
        let _ = self
            .term
            .write_line(&format!("🔍 Verifying APK: {}", report.path.display()));

        match &report.outcome {
            InspectionOutcome::NotFound => {
                let _ = self.term.write_line("❌ APK file not found");
            }
            InspectionOutcome::InvalidFormat { .. } => {
                self.write_size(report);
                let _ = self.term.write_line("❌ Invalid ZIP/APK format");
            }
            InspectionOutcome::ReadError(message) => {
                self.write_size(report);
                let _ = self
                    .term
                    .write_line(&format!("❌ Error reading APK: {message}"));
            }
            InspectionOutcome::Analyzed(summary) => {
                self.write_size(report);
                self.write_summary(summary);
            }
        }

        Ok(())
    }

    fn format_divider(&self) -> Result<()> {
        let _ = self.term.write_line(&"-".repeat(DIVIDER_WIDTH));
        Ok(())
    }
}
