//! Report Data Structures

use chrono::{DateTime, Utc};
use pulsebench_core::{ProbeResult, SamplerConfig};
use serde::{Deserialize, Serialize};

/// Schema version of the JSON report layout.
pub const SCHEMA_VERSION: u32 = 1;

/// Complete report for one harness run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata.
    pub meta: ReportMeta,
    /// One entry per executed probe, in execution (registration) order.
    pub results: Vec<ProbeReportEntry>,
    /// Run totals.
    pub summary: ReportSummary,
}

/// Report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// JSON schema version.
    pub schema_version: u32,
    /// Harness crate version.
    pub version: String,
    /// UTC timestamp of report generation.
    pub timestamp: DateTime<Utc>,
    /// Effective sampler configuration for this run.
    pub sampler: SamplerSnapshot,
}

/// The sampler configuration as it was actually applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplerSnapshot {
    /// Invocations per batch.
    pub batch_size: usize,
    /// Convergence sample-count floor.
    pub min_samples: usize,
    /// Per-probe sample ceiling.
    pub max_samples: usize,
    /// Per-probe wall-clock budget in milliseconds.
    pub time_budget_ms: u64,
}

impl From<&SamplerConfig> for SamplerSnapshot {
    fn from(config: &SamplerConfig) -> Self {
        Self {
            batch_size: config.batch_size,
            min_samples: config.min_samples,
            max_samples: config.max_samples,
            time_budget_ms: config.time_budget.as_millis() as u64,
        }
    }
}

/// One executed probe in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeReportEntry {
    /// Registration ordinal.
    pub id: u32,
    /// Probe display name.
    pub name: String,
    /// Display unit label.
    pub unit: String,
    /// Which stopping condition ended sampling.
    pub stop_reason: String,
    /// Computed statistics.
    pub metrics: ProbeMetrics,
}

/// The analyzer verdict, flattened for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeMetrics {
    /// Arithmetic mean, in the probe's unit.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// 50th percentile.
    pub p50: f64,
    /// 95th percentile.
    pub p95: f64,
    /// 99th percentile.
    pub p99: f64,
    /// 99.9th percentile.
    pub p999: f64,
    /// Distribution-shape label.
    pub shape: String,
    /// Samples analyzed.
    pub samples: usize,
    /// Whether the mean estimate converged.
    pub converged: bool,
}

/// Run totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Probes in the catalog.
    pub total_probes: usize,
    /// Probes executed this run.
    pub executed: usize,
    /// Probes skipped by the filter.
    pub skipped: usize,
    /// Total sampling wall time in milliseconds.
    pub total_duration_ms: f64,
}

/// Assemble a [`Report`] from runner results.
pub fn build_report(
    results: &[ProbeResult],
    total_probes: usize,
    config: &SamplerConfig,
) -> Report {
    let entries: Vec<ProbeReportEntry> = results
        .iter()
        .map(|r| ProbeReportEntry {
            id: r.id,
            name: r.name.clone(),
            unit: r.unit.label().to_string(),
            stop_reason: r.stop.label().to_string(),
            metrics: ProbeMetrics {
                mean: r.summary.mean,
                std_dev: r.summary.std_dev,
                p50: r.summary.p50,
                p95: r.summary.p95,
                p99: r.summary.p99,
                p999: r.summary.p999,
                shape: r.summary.shape.label().to_string(),
                samples: r.summary.samples,
                converged: r.summary.converged,
            },
        })
        .collect();

    let total_duration_ms: f64 = results.iter().map(|r| r.wall_time.as_secs_f64() * 1e3).sum();

    Report {
        meta: ReportMeta {
            schema_version: SCHEMA_VERSION,
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            sampler: SamplerSnapshot::from(config),
        },
        results: entries,
        summary: ReportSummary {
            total_probes,
            executed: results.len(),
            skipped: total_probes - results.len(),
            total_duration_ms,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsebench_core::{Registry, StopReason, Unit, run_probe};

    fn sample_results() -> Vec<ProbeResult> {
        let mut reg = Registry::new();
        reg.register("steady", Unit::Micros, || 2.0);
        reg.iter_mut()
            .map(|def| run_probe(def, &SamplerConfig::default()))
            .collect()
    }

    #[test]
    fn test_build_report_counts_skips() {
        let results = sample_results();
        let report = build_report(&results, 10, &SamplerConfig::default());
        assert_eq!(report.summary.total_probes, 10);
        assert_eq!(report.summary.executed, 1);
        assert_eq!(report.summary.skipped, 9);
        assert_eq!(report.meta.schema_version, SCHEMA_VERSION);

        let entry = &report.results[0];
        assert_eq!(entry.name, "steady");
        assert_eq!(entry.unit, "us");
        assert_eq!(entry.stop_reason, StopReason::Converged.label());
        assert_eq!(entry.metrics.samples, 100);
        assert!(entry.metrics.converged);
    }

    #[test]
    fn test_sampler_snapshot_round_trips_defaults() {
        let snap = SamplerSnapshot::from(&SamplerConfig::default());
        assert_eq!(snap.batch_size, 20);
        assert_eq!(snap.min_samples, 100);
        assert_eq!(snap.max_samples, 2000);
        assert_eq!(snap.time_budget_ms, 1000);
    }
}
