// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Set of canonical representatives, one per orbit.

use super::orbit::orbit;
use crate::geometry::{Arrangement, Topology};
use std::collections::HashSet;

/// Representatives of the orbits found so far.
///
/// An arrangement is only added after checking that no variant of it is
/// already present, so the set never holds two members of one orbit. Entries
/// are never removed.
#[derive(Debug, Clone)]
pub struct KnownSolutions<const N: usize> {
    keys: HashSet<Arrangement<N>>,
    /// Representatives in the order they were found.
    found: Vec<Arrangement<N>>,
}

impl<const N: usize> KnownSolutions<N> {
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
            found: Vec::new(),
        }
    }

    /// True if any of `variants` is already a representative.
    pub fn contains_any(&self, variants: &[Arrangement<N>]) -> bool {
        variants.iter().any(|variant| self.keys.contains(variant))
    }

    /// Add `arrangement` unless some member of its orbit is already known.
    ///
    /// Returns true if it became a new representative.
    pub fn insert_if_new(&mut self, topology: &Topology<N>, arrangement: &Arrangement<N>) -> bool {
        if self.contains_any(&orbit(topology, arrangement)) {
            return false;
        }
        self.keys.insert(*arrangement);
        self.found.push(*arrangement);
        true
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    /// Representatives in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Arrangement<N>> {
        self.found.iter()
    }

    pub fn into_vec(self) -> Vec<Arrangement<N>> {
        self.found
    }
}

impl<const N: usize> Default for KnownSolutions<N> {
    fn default() -> Self {
        Self::new()
    }
}
