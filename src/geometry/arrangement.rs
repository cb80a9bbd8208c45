// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Values placed on the positions of a layout.

use itertools::Itertools;
use std::fmt;

/// One value per position.
///
/// An arrangement is a plain value: it is copied whenever a transformed
/// variant is needed, and two arrangements are equal exactly when they hold
/// the same value at every position. The derived ordering is lexicographic
/// by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Arrangement<const N: usize>([u32; N]);

impl<const N: usize> Arrangement<N> {
    pub const fn new(values: [u32; N]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[u32; N] {
        &self.0
    }

    pub fn get(&self, position: usize) -> u32 {
        self.0[position]
    }

    pub(crate) fn values_mut(&mut self) -> &mut [u32; N] {
        &mut self.0
    }

    /// Sum of the values at the given positions.
    pub fn sum_of(&self, positions: &[usize]) -> u32 {
        positions.iter().map(|&p| self.0[p]).sum()
    }

    /// Move every value along `map`: position `i` receives the value that was
    /// at `map[i]`.
    pub fn relabel(&mut self, map: &[usize; N]) {
        let old = self.0;
        for (slot, &source) in self.0.iter_mut().zip(map.iter()) {
            *slot = old[source];
        }
    }

    /// Exchange the values of each pair of positions.
    pub fn swap_pairs(&mut self, pairs: &[(usize, usize)]) {
        for &(a, b) in pairs {
            self.0.swap(a, b);
        }
    }
}

impl<const N: usize> From<[u32; N]> for Arrangement<N> {
    fn from(values: [u32; N]) -> Self {
        Self(values)
    }
}

/// Comma separated values, e.g. `1, 2, 11, 12, ...`.
impl<const N: usize> fmt::Display for Arrangement<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(", "))
    }
}
