#![warn(missing_docs)]
//! PulseBench Core - Probe Contract and Runner
//!
//! This crate provides the execution half of the harness:
//! - The [`Probe`] contract: a zero-argument operation returning its elapsed
//!   cost as an `f64` in a probe-chosen unit
//! - An ordered [`Registry`] assigning stable sequential ordinal ids
//! - [`Stopwatch`] timing helpers for probe bodies
//! - The [`Runner`](run_probe): adaptive batched sampling with an online
//!   convergence stopping rule
//!
//! Execution is single-threaded and synchronous: one probe is fully measured
//! before the next begins. Probe invocations are opaque, blocking, and
//! non-cancellable; a probe that never returns hangs the harness.

mod measure;
mod probe;
mod registry;
mod runner;

pub use measure::Stopwatch;
pub use probe::{Probe, ProbeDef, Unit};
pub use registry::Registry;
pub use runner::{ProbeResult, SamplerConfig, StopReason, run_filtered, run_probe};
