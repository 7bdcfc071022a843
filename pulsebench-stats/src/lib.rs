#![warn(missing_docs)]
//! PulseBench Statistical Engine
//!
//! Provides the online analysis pass that drives adaptive sampling:
//! - Summary statistics (mean, population stddev, nearest-rank percentiles)
//! - Convergence detection via the standard error of the mean
//! - A coarse distribution-shape heuristic (not a goodness-of-fit test)
//!
//! `analyze` is a pure function of the sample multiset: sorting happens on an
//! internal copy, so input order never affects the output.

mod shape;
mod summary;

pub use shape::Shape;
pub use summary::{Summary, analyze};

/// Minimum sample count below which analysis is degenerate ("Gathering…").
pub const MIN_SAMPLES_FOR_ANALYSIS: usize = 5;

/// z-score for a 99.9% confidence interval on the mean.
pub const CONVERGENCE_Z: f64 = 3.291;

/// Relative half-width of the confidence interval at which sampling may stop.
pub const CONVERGENCE_RELATIVE_MARGIN: f64 = 0.005;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(MIN_SAMPLES_FOR_ANALYSIS, 5);
        assert!((CONVERGENCE_Z - 3.291).abs() < f64::EPSILON);
        assert!((CONVERGENCE_RELATIVE_MARGIN - 0.005).abs() < f64::EPSILON);
    }
}
