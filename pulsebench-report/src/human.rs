//! Human-Readable Output
//!
//! One formatted line per executed probe. Column widths are presentation
//! detail; the contract is the content: ordinal id, name, mean, p99.9, unit,
//! sample count, and shape label.

use crate::report::Report;

/// Format a report for terminal display.
pub fn format_human_output(report: &Report, header: bool) -> String {
    let mut out = String::new();

    if header {
        out.push_str("=== PulseBench Self-Calibrating Probe Suite ===\n\n");
    }

    for entry in &report.results {
        let m = &entry.metrics;
        out.push_str(&format!(
            "{:>2}. {:<20} | Avg: {:>8.2} | P99.9: {:>9.2} {:<4} | Samples: {:>5} | Dist: {}\n",
            entry.id, entry.name, m.mean, m.p999, entry.unit, m.samples, m.shape
        ));
    }

    if header {
        out.push_str(&format!(
            "\n{} of {} probes executed in {:.0} ms\n",
            report.summary.executed, report.summary.total_probes, report.summary.total_duration_ms
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::build_report;
    use pulsebench_core::{Registry, SamplerConfig, Unit, run_probe};

    #[test]
    fn test_result_line_contains_the_contracted_fields() {
        let mut reg = Registry::new();
        reg.register("Steady Clock", Unit::Nanos, || 4.0);
        let results: Vec<_> = reg
            .iter_mut()
            .map(|d| run_probe(d, &SamplerConfig::default()))
            .collect();
        let report = build_report(&results, 1, &SamplerConfig::default());

        let text = format_human_output(&report, true);
        let line = text
            .lines()
            .find(|l| l.contains("Steady Clock"))
            .expect("missing result line");

        assert!(line.starts_with(" 1."));
        assert!(line.contains("Avg:"));
        assert!(line.contains("P99.9:"));
        assert!(line.contains("ns"));
        assert!(line.contains("Samples:   100"));
        assert!(line.contains("Dist: Deterministic"));
    }

    #[test]
    fn test_filtered_run_omits_header() {
        let report = build_report(&[], 64, &SamplerConfig::default());
        let text = format_human_output(&report, false);
        assert!(text.is_empty());
    }
}
