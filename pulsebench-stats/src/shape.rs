//! Distribution-Shape Heuristic
//!
//! A rule-based guess at the qualitative shape of a latency distribution.
//! The thresholds are practical UI heuristics, not derived estimators; they
//! are preserved exactly for behavioral compatibility.

use std::fmt;

/// Multiple of the mean beyond which the maximum sample indicates a fat tail.
const FAT_TAIL_MAX_FACTOR: f64 = 50.0;

/// Multiple of the mean beyond which the p99 sample indicates heavy right skew.
const LOG_NORMAL_P99_FACTOR: f64 = 5.0;

/// Relative spread below which the distribution is treated as deterministic.
const DETERMINISTIC_CV: f64 = 0.001;

/// Qualitative shape label for a sample distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Too few samples to say anything.
    Gathering,
    /// Default label when no other rule fires.
    Normal,
    /// A single extreme outlier dominates the set.
    FatTail,
    /// Heavy but not extreme right skew.
    LogNormal,
    /// Negligible relative spread.
    Deterministic,
}

impl Shape {
    /// Classify an already-sorted, non-degenerate sample set.
    ///
    /// Rules are ordered; the first match wins. An all-zero sample set falls
    /// through every guard (`0 > 0` is false) and is labeled `Normal` — this
    /// fallthrough is intended.
    pub(crate) fn classify(sorted: &[f64], mean: f64, std_dev: f64) -> Shape {
        let n = sorted.len();
        let max = sorted[n - 1];
        let p99 = sorted[(n as f64 * 0.99) as usize];

        if max > mean * FAT_TAIL_MAX_FACTOR {
            Shape::FatTail
        } else if p99 > mean * LOG_NORMAL_P99_FACTOR {
            Shape::LogNormal
        } else if std_dev < mean * DETERMINISTIC_CV {
            Shape::Deterministic
        } else {
            Shape::Normal
        }
    }

    /// Display label, drawn from the closed set reported to users.
    pub fn label(self) -> &'static str {
        match self {
            Shape::Gathering => "Gathering…",
            Shape::Normal => "Normal",
            Shape::FatTail => "Cauchy (Fat-Tail)",
            Shape::LogNormal => "Log-Normal",
            Shape::Deterministic => "Deterministic",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
