//! Advisory per-manifest reporting.
//!
//! Reports never influence graph construction; they summarize the validator
//! findings and the primary-resource check for a human (colored text) or a script
//! (JSON).

use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use crate::core::NodeIdentity;
use crate::validation::FlaggedNode;

/// Summary of one processed manifest.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestReport {
    pub label: String,
    /// No validator flagged any node.
    pub valid: bool,
    pub has_primary_resource: bool,
    pub nodes: usize,
    pub edges: usize,
    /// Nodes removed by the type filter before rendering.
    pub excluded: Vec<NodeIdentity>,
    pub flagged: Vec<FlaggedNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl ManifestReport {
    /// Valid and has a primary resource.
    pub fn is_clean(&self) -> bool {
        self.valid && self.has_primary_resource
    }

    /// Text lines for this report, colored when the terminal allows it.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if self.valid {
            lines.push(format!("{} {} {}", "✓".green(), self.label, "valid".green()));
        } else {
            lines.push(format!("{} {} {}", "✗".red(), self.label, "invalid".red()));
            for flagged in &self.flagged {
                lines.push(format!("    {}: {}", flagged.node, flagged.message));
            }
        }

        if !self.has_primary_resource {
            lines.push(format!(
                "{} {}",
                "✗".red(),
                format!(
                    "{} has no primary resource (every resource declares dependencies)",
                    self.label
                )
                .red()
            ));
        }

        if let Some(output) = &self.output {
            lines.push(format!("  → {}", output.display()));
        }

        lines
    }
}

/// Output format of reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Print `reports` to stdout in `format`.
pub fn print_reports(reports: &[ManifestReport], format: ReportFormat) -> anyhow::Result<()> {
    match format {
        ReportFormat::Text => {
            for report in reports {
                for line in report.to_lines() {
                    println!("{line}");
                }
            }
        }
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(reports)?),
    }
    Ok(())
}
