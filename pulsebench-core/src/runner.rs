//! Adaptive Sampling Runner
//!
//! Drives repeated invocation of one probe, feeding the accumulated sample
//! set to the analyzer after every batch and stopping when the mean estimate
//! is tight enough, the per-probe wall-clock budget runs out, or the sample
//! ceiling is hit — whichever fires first.
//!
//! The runner never preempts a probe mid-invocation. The budget is checked
//! between invocations, so a probe slower than the whole budget is invoked
//! exactly once before the stop condition is observed at the batch boundary.

use std::time::{Duration, Instant};

use pulsebench_stats::{Summary, analyze};
use tracing::debug;

use crate::probe::{ProbeDef, Unit};
use crate::registry::Registry;

/// Sampling-loop tuning knobs. The defaults are the harness's canonical
/// constants; overriding them is a diagnostic convenience, not a promise of
/// statistical rigor.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig {
    /// Raw invocations per batch between analyzer passes.
    pub batch_size: usize,
    /// Sample-count floor below which convergence cannot end the run. Guards
    /// against a lucky low-variance early batch terminating prematurely.
    pub min_samples: usize,
    /// Hard ceiling on accumulated samples per probe.
    pub max_samples: usize,
    /// Wall-clock budget per probe, measured from that probe's first
    /// invocation, not process start.
    pub time_budget: Duration,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            batch_size: 20,
            min_samples: 100,
            max_samples: 2000,
            time_budget: Duration::from_secs(1),
        }
    }
}

/// Which stopping condition ended a probe's sampling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The analyzer reported convergence with the sample floor satisfied.
    Converged,
    /// The per-probe wall-clock budget was exhausted.
    BudgetExhausted,
    /// The accumulated sample count hit the hard ceiling.
    SampleCeiling,
}

impl StopReason {
    /// Short label for reports.
    pub fn label(self) -> &'static str {
        match self {
            StopReason::Converged => "converged",
            StopReason::BudgetExhausted => "budget",
            StopReason::SampleCeiling => "ceiling",
        }
    }
}

/// Measured outcome of one probe run.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    /// Registration ordinal of the probe.
    pub id: u32,
    /// Probe display name.
    pub name: String,
    /// Probe display unit.
    pub unit: Unit,
    /// Final analyzer verdict over the complete sample set.
    pub summary: Summary,
    /// Which stopping condition fired.
    pub stop: StopReason,
    /// Wall time spent sampling this probe.
    pub wall_time: Duration,
}

/// Run one probe to completion under the given sampling configuration.
///
/// Samples accumulate in batches of `config.batch_size`; after each batch the
/// analyzer re-runs over the full set. The returned summary comes from one
/// explicit final analyzer pass over the complete set — not from the last
/// in-loop verdict — keeping the loop and the report decoupled even though
/// the two are computed from the same data on the converged path.
pub fn run_probe(def: &mut ProbeDef, config: &SamplerConfig) -> ProbeResult {
    let mut samples: Vec<f64> = Vec::with_capacity(config.max_samples.min(1024));
    let start = Instant::now();
    let mut stop = StopReason::SampleCeiling;

    'sampling: while samples.len() < config.max_samples {
        for _ in 0..config.batch_size {
            samples.push(def.sample());
            if samples.len() >= config.max_samples || start.elapsed() >= config.time_budget {
                break;
            }
        }

        let verdict = analyze(&samples);
        debug!(
            probe = %def.name,
            samples = verdict.samples,
            mean = verdict.mean,
            converged = verdict.converged,
            "batch analyzed"
        );

        if verdict.converged && samples.len() >= config.min_samples {
            stop = StopReason::Converged;
            break 'sampling;
        }
        if start.elapsed() >= config.time_budget {
            stop = StopReason::BudgetExhausted;
            break 'sampling;
        }
    }

    let wall_time = start.elapsed();
    let summary = analyze(&samples);
    debug!(
        probe = %def.name,
        samples = summary.samples,
        stop = stop.label(),
        shape = %summary.shape,
        "probe finished"
    );

    ProbeResult {
        id: def.id,
        name: def.name.clone(),
        unit: def.unit,
        summary,
        stop,
        wall_time,
    }
}

/// Run every registered probe whose name contains `filter`, in registration
/// order, one probe fully measured before the next begins.
///
/// An empty filter matches everything. Skipped probes keep their ordinal
/// ids — a filtered run reports the same id for the same probe name as an
/// unfiltered one, even if zero probes match.
pub fn run_filtered(
    registry: &mut Registry,
    filter: &str,
    config: &SamplerConfig,
) -> Vec<ProbeResult> {
    let mut results = Vec::new();
    for def in registry.iter_mut() {
        if !filter.is_empty() && !def.name.contains(filter) {
            debug!(probe = %def.name, id = def.id, "skipped by filter");
            continue;
        }
        results.push(run_probe(def, config));
    }
    results
}
