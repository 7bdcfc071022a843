#![warn(missing_docs)]
//! # PulseBench
//!
//! A self-calibrating micro-benchmark harness: a fixed catalog of
//! side-effect-producing probes (CPU, memory hierarchy, syscalls,
//! concurrency primitives) driven by an online convergence engine that
//! decides, per probe, how many samples are enough and characterizes the
//! latency distribution.
//!
//! ## How sampling stops
//!
//! Samples accumulate in batches of 20; after each batch the analyzer
//! re-runs over the full set. Sampling ends when the mean is estimated to
//! within 0.5% relative error at 99.9% confidence (with at least 100
//! samples), when the probe's 1-second wall-clock budget runs out, or at the
//! 2000-sample ceiling — whichever fires first.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pulsebench::prelude::*;
//!
//! let mut registry = Registry::new();
//! registry.register("tight loop", Unit::Nanos, || {
//!     let sw = Stopwatch::start();
//!     std::hint::black_box((0..1000u64).sum::<u64>());
//!     sw.elapsed_nanos()
//! });
//!
//! let results = run_filtered(&mut registry, "", &SamplerConfig::default());
//! for r in &results {
//!     println!("{}: {:.2} {} ({})", r.name, r.summary.mean, r.unit, r.summary.shape);
//! }
//! ```
//!
//! The full built-in catalog is available via [`catalog`]; the CLI binary in
//! `pulsebench-cli` wraps all of this behind `pulsebench::run()`.

pub use pulsebench_core::{
    Probe, ProbeDef, ProbeResult, Registry, SamplerConfig, StopReason, Stopwatch, Unit,
    run_filtered, run_probe,
};
pub use pulsebench_probes::catalog;
pub use pulsebench_report::{
    OutputFormat, Report, build_report, format_human_output, generate_json_report,
};
pub use pulsebench_stats::{Shape, Summary, analyze};

/// Run the PulseBench CLI harness.
///
/// Call this from a binary's `main()`:
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     pulsebench::run()
/// }
/// ```
pub use pulsebench_cli::run;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ProbeResult, Registry, SamplerConfig, Shape, StopReason, Stopwatch, Summary, Unit,
        analyze, catalog, run_filtered, run_probe,
    };
}
