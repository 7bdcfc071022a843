#![warn(missing_docs)]
//! PulseBench Reporting
//!
//! Turns runner results into output:
//! - Human-readable result lines, one per executed probe
//! - A machine-readable JSON report with run metadata

mod human;
mod json;
mod report;

pub use human::format_human_output;
pub use json::generate_json_report;
pub use report::{ProbeMetrics, ProbeReportEntry, Report, ReportMeta, ReportSummary, build_report};

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Human,
    /// JSON with full schema.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
