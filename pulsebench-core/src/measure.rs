//! Elapsed-Time Measurement
//!
//! Thin wrapper over `std::time::Instant` yielding floating-point readings in
//! the units probes report in. Monotonic, so readings are always >= 0.

use std::time::Instant;

/// Monotonic stopwatch for timing a probe's unit of work.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Start timing now.
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time in milliseconds.
    #[inline(always)]
    pub fn elapsed_millis(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1e3
    }

    /// Elapsed time in microseconds.
    #[inline(always)]
    pub fn elapsed_micros(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1e6
    }

    /// Elapsed time in nanoseconds.
    #[inline(always)]
    pub fn elapsed_nanos(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1e9
    }

    /// Elapsed time in seconds.
    #[inline(always)]
    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readings_are_non_negative_and_ordered() {
        let sw = Stopwatch::start();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let ms = sw.elapsed_millis();
        let us = sw.elapsed_micros();
        assert!(ms >= 2.0);
        // Later reading in a finer unit dominates the earlier one.
        assert!(us >= ms * 1e3);
    }
}
