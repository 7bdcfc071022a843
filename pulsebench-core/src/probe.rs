//! Probe Contract
//!
//! A probe is an opaque timed operation: zero arguments, one unit of work,
//! returns its elapsed cost as a non-negative `f64` in a probe-chosen unit.
//! What the work is (arithmetic, memory traffic, a fork, a mutex) is domain
//! content the harness never inspects.
//!
//! Probes that need a working set own it: the closure captures state built at
//! registration time instead of reaching for process-wide globals. A probe
//! whose first invocation is markedly slower than the rest (cold caches, lazy
//! page-in) is fine; the harness makes no warm-up distinction.

use std::fmt;

/// A registered probe body: callable repeatedly, may mutate captured state.
pub type Probe = Box<dyn FnMut() -> f64 + 'static>;

/// Display unit for a probe's readings. Opaque to the analyzer; the runner
/// carries it through to the result line unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Milliseconds.
    Millis,
    /// Microseconds.
    Micros,
    /// Nanoseconds.
    Nanos,
    /// Dimensionless ratio (e.g. random/sequential access cost).
    Ratio,
    /// Reserved/unitless probes.
    Unitless,
}

impl Unit {
    /// Short label used in result lines.
    pub fn label(self) -> &'static str {
        match self {
            Unit::Millis => "ms",
            Unit::Micros => "us",
            Unit::Nanos => "ns",
            Unit::Ratio => "x",
            Unit::Unitless => "unit",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A probe plus its registration metadata. Created once at catalog build
/// time; the ordinal id never changes afterwards.
pub struct ProbeDef {
    /// Sequential ordinal id, assigned at registration (1-based).
    pub id: u32,
    /// Human-readable display name; also the target of substring filtering.
    pub name: String,
    /// Display unit for this probe's readings.
    pub unit: Unit,
    probe: Probe,
}

impl ProbeDef {
    pub(crate) fn new(id: u32, name: String, unit: Unit, probe: Probe) -> Self {
        Self {
            id,
            name,
            unit,
            probe,
        }
    }

    /// Invoke the probe once, yielding one sample.
    #[inline]
    pub fn sample(&mut self) -> f64 {
        (self.probe)()
    }
}

impl fmt::Debug for ProbeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeDef")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("unit", &self.unit)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_labels() {
        assert_eq!(Unit::Millis.label(), "ms");
        assert_eq!(Unit::Micros.to_string(), "us");
        assert_eq!(Unit::Nanos.label(), "ns");
        assert_eq!(Unit::Ratio.label(), "x");
        assert_eq!(Unit::Unitless.label(), "unit");
    }

    #[test]
    fn test_probe_state_is_owned_by_the_closure() {
        let mut calls = 0u32;
        let mut def = ProbeDef::new(
            1,
            "counting".to_string(),
            Unit::Micros,
            Box::new(move || {
                calls += 1;
                calls as f64
            }),
        );
        assert_eq!(def.sample(), 1.0);
        assert_eq!(def.sample(), 2.0);
    }
}
