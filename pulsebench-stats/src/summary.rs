//! Summary Statistics
//!
//! Computes the full per-probe summary from a raw sample set in one pass:
//! mean, population standard deviation, nearest-rank tail percentiles, the
//! convergence verdict, and the shape label. The summary is recomputed from
//! scratch on every call; nothing is incrementally updated.

use crate::shape::Shape;
use crate::{CONVERGENCE_RELATIVE_MARGIN, CONVERGENCE_Z, MIN_SAMPLES_FOR_ANALYSIS};

/// Computed statistics and convergence verdict for one sample set.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// 50th percentile (nearest-rank).
    pub p50: f64,
    /// 95th percentile (nearest-rank).
    pub p95: f64,
    /// 99th percentile (nearest-rank).
    pub p99: f64,
    /// 99.9th percentile (nearest-rank).
    pub p999: f64,
    /// Qualitative distribution-shape guess.
    pub shape: Shape,
    /// Number of samples analyzed.
    pub samples: usize,
    /// Whether the mean estimate is tight enough to stop sampling.
    pub converged: bool,
}

impl Summary {
    fn gathering(n: usize) -> Summary {
        Summary {
            mean: 0.0,
            std_dev: 0.0,
            p50: 0.0,
            p95: 0.0,
            p99: 0.0,
            p999: 0.0,
            shape: Shape::Gathering,
            samples: n,
            converged: false,
        }
    }
}

/// Analyze a sample set.
///
/// Pure and deterministic given the same multiset of inputs: sorting happens
/// on an internal copy. Fewer than [`MIN_SAMPLES_FOR_ANALYSIS`] samples yield
/// a degenerate summary with all statistics zero, guarding against
/// meaningless variance estimates on tiny samples.
///
/// Convergence declares the true mean estimated to within 0.5% relative
/// error at 99.9% confidence (`margin = 3.291 · stddev / sqrt(n)`). A sample
/// set whose mean is exactly zero never converges by this rule.
pub fn analyze(samples: &[f64]) -> Summary {
    let n = samples.len();
    if n < MIN_SAMPLES_FOR_ANALYSIS {
        return Summary::gathering(n);
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let nf = n as f64;
    let sum: f64 = sorted.iter().sum();
    let mean = sum / nf;
    let sq_sum: f64 = sorted.iter().map(|x| x * x).sum();
    // The max(0) floor absorbs floating-point cancellation that could
    // otherwise produce a small negative variance.
    let variance = (sq_sum / nf - mean * mean).max(0.0);
    let std_dev = variance.sqrt();

    let sem = std_dev / nf.sqrt();
    let converged = mean != 0.0 && CONVERGENCE_Z * sem / mean < CONVERGENCE_RELATIVE_MARGIN;

    let shape = Shape::classify(&sorted, mean, std_dev);

    // Nearest-rank percentiles: floor(n * q) indexes stay in range for q < 1.
    let rank = |q: f64| sorted[(nf * q) as usize];

    Summary {
        mean,
        std_dev,
        p50: sorted[n / 2],
        p95: rank(0.95),
        p99: rank(0.99),
        p999: rank(0.999),
        shape,
        samples: n,
        converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_insufficient_samples_are_degenerate() {
        for n in 0..5 {
            let samples: Vec<f64> = (0..n).map(|i| i as f64 + 1.0).collect();
            let s = analyze(&samples);
            assert!(!s.converged);
            assert_eq!(s.shape, Shape::Gathering);
            assert_eq!(s.samples, n);
            assert_eq!(s.mean, 0.0);
            assert_eq!(s.std_dev, 0.0);
            assert_eq!(s.p999, 0.0);
        }
    }

    #[test]
    fn test_constant_samples_are_deterministic_and_converged() {
        let samples = vec![3.5; 10];
        let s = analyze(&samples);
        assert!((s.mean - 3.5).abs() < 1e-12);
        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.p50, 3.5);
        assert_eq!(s.p95, 3.5);
        assert_eq!(s.p99, 3.5);
        assert_eq!(s.p999, 3.5);
        assert_eq!(s.shape, Shape::Deterministic);
        assert!(s.converged);
    }

    #[test]
    fn test_uniform_samples_look_normal() {
        let mut rng = StdRng::seed_from_u64(17);
        let samples: Vec<f64> = (0..1000).map(|_| rng.gen_range(1.0..2.0)).collect();
        let s = analyze(&samples);
        assert!(s.mean >= 1.0 && s.mean < 2.0);
        // Uniform [1,2) stddev is 1/sqrt(12) ~ 0.289.
        assert!(s.std_dev <= 0.29);
        assert_eq!(s.shape, Shape::Normal);
    }

    #[test]
    fn test_single_outlier_flips_to_fat_tail() {
        // The outlier itself drags the mean up, so the set must be large
        // enough that 100x the old mean still clears 50x the new one.
        let mut samples = vec![1.0; 200];
        samples.push(100.0);
        let s = analyze(&samples);
        assert_eq!(s.shape, Shape::FatTail);
    }

    #[test]
    fn test_heavy_right_skew_is_log_normal() {
        // 96 tight samples plus a 4% tail at 10x: p99 lands in the tail
        // (> 5x mean) while the max stays under 50x the mean.
        let mut samples = vec![1.0; 96];
        samples.extend_from_slice(&[10.0, 10.0, 10.0, 10.0]);
        let s = analyze(&samples);
        assert_eq!(s.shape, Shape::LogNormal);
    }

    #[test]
    fn test_percentile_monotonicity() {
        let mut rng = StdRng::seed_from_u64(99);
        for n in [5usize, 17, 100, 999] {
            let samples: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..50.0)).collect();
            let s = analyze(&samples);
            assert!(s.p50 <= s.p95, "n={}", n);
            assert!(s.p95 <= s.p99, "n={}", n);
            assert!(s.p99 <= s.p999, "n={}", n);
        }
    }

    #[test]
    fn test_order_independence() {
        let a = vec![5.0, 1.0, 4.0, 2.0, 3.0, 9.0, 7.0];
        let mut b = a.clone();
        b.reverse();
        let sa = analyze(&a);
        let sb = analyze(&b);
        assert_eq!(sa.mean, sb.mean);
        assert_eq!(sa.p50, sb.p50);
        assert_eq!(sa.p999, sb.p999);
        assert_eq!(sa.shape, sb.shape);
    }

    #[test]
    fn test_all_zero_samples_never_converge() {
        let s = analyze(&[0.0; 50]);
        assert!(!s.converged);
        assert_eq!(s.shape, Shape::Normal);
        assert_eq!(s.mean, 0.0);
    }

    #[test]
    fn test_variance_cancellation_floor() {
        // Large offset with tiny spread: sum-of-squares cancellation must not
        // produce a NaN stddev.
        let samples = vec![1e9, 1e9, 1e9, 1e9, 1e9, 1e9];
        let s = analyze(&samples);
        assert!(s.std_dev.is_finite());
        assert!(s.std_dev >= 0.0);
    }
}
