//! Probe Registry
//!
//! An ordered catalog of probes, built once at startup and consumed
//! sequentially by the runner. Registration order is id order: the first
//! registered probe is id 1, and ids are fixed from then on. Skipping a probe
//! at run time (filtering) does not renumber anything.

use crate::probe::{Probe, ProbeDef, Unit};

/// Ordered, append-only catalog of probes.
#[derive(Debug, Default)]
pub struct Registry {
    probes: Vec<ProbeDef>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { probes: Vec::new() }
    }

    /// Register a probe, assigning the next sequential ordinal id.
    ///
    /// Returns the assigned id (1-based).
    pub fn register(
        &mut self,
        name: impl Into<String>,
        unit: Unit,
        probe: impl FnMut() -> f64 + 'static,
    ) -> u32 {
        let id = self.probes.len() as u32 + 1;
        self.probes
            .push(ProbeDef::new(id, name.into(), unit, Box::new(probe) as Probe));
        id
    }

    /// Number of registered probes.
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Iterate over probe definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ProbeDef> {
        self.probes.iter()
    }

    /// Iterate mutably, in registration order. Used by the runner, which
    /// needs `&mut` to invoke probe bodies.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ProbeDef> {
        self.probes.iter_mut()
    }
}
