// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Layout description: windows, target sum and symmetries.
//!
//! A [`Topology`] is static configuration. The star is the [`STAR`] constant;
//! smaller layouts with the same shape of tables (a ring of four, a magic
//! triangle) are used to check the search on spaces small enough to verify by
//! hand.

use super::arrangement::Arrangement;
use super::constants::*;
use crate::error::TopologyError;
use std::collections::HashSet;

/// Windows, target sum and symmetry generators of a layout with `N` positions.
#[derive(Debug, Clone, Copy)]
pub struct Topology<const N: usize> {
    /// Groups of positions whose values must each sum to `target_sum`.
    pub windows: &'static [&'static [usize]],
    pub target_sum: u32,
    /// Position `i` receives the value from `rotation[i]`.
    pub rotation: [usize; N],
    /// Smallest `k > 0` with `rotation^k == identity`.
    pub rotation_order: usize,
    /// Each mirror is a set of disjoint position swaps.
    pub mirrors: &'static [&'static [(usize, usize)]],
}

/// The twelve position magic star (hexagram).
pub const STAR: Topology<NPOSITIONS> = Topology {
    windows: &STAR_WINDOWS,
    target_sum: TARGET_SUM,
    rotation: STAR_ROTATION,
    rotation_order: STAR_ROTATION_ORDER,
    mirrors: &[&MIRROR_LONG_AXIS, &MIRROR_SHORT_AXIS],
};

impl<const N: usize> Topology<N> {
    /// True when every window sums to the target.
    pub fn is_valid(&self, arrangement: &Arrangement<N>) -> bool {
        self.windows
            .iter()
            .all(|window| arrangement.sum_of(window) == self.target_sum)
    }

    /// The sum of each window, in window order.
    pub fn window_sums(&self, arrangement: &Arrangement<N>) -> Vec<u32> {
        self.windows
            .iter()
            .map(|window| arrangement.sum_of(window))
            .collect()
    }

    /// Rotate in place by one step.
    pub fn rotate(&self, arrangement: &mut Arrangement<N>) {
        arrangement.relabel(&self.rotation);
    }

    /// Reflect in place using mirror number `mirror`.
    pub fn mirror(&self, arrangement: &mut Arrangement<N>, mirror: usize) {
        arrangement.swap_pairs(self.mirrors[mirror]);
    }

    /// Number of variants [`orbit`](crate::symmetry::orbit) produces.
    pub fn orbit_size(&self) -> usize {
        (1 + self.mirrors.len()) * self.rotation_order
    }

    /// Check that the tables describe a layout and that every transform is a
    /// symmetry of the windows.
    pub fn validate(&self) -> Result<(), TopologyError> {
        self.validate_windows()?;
        self.validate_rotation()?;
        self.validate_mirrors()?;

        let windows: HashSet<Vec<usize>> = self.windows.iter().map(|w| sorted(w)).collect();
        let preserved = |map: &[usize; N], transform: &'static str| {
            for (index, window) in self.windows.iter().enumerate() {
                let image = sorted(&window.iter().map(|&p| map[p]).collect::<Vec<_>>());
                if !windows.contains(&image) {
                    return Err(TopologyError::NotASymmetry {
                        transform,
                        window: index,
                    });
                }
            }
            Ok(())
        };

        preserved(&self.rotation, "rotation")?;
        for mirror in self.mirrors {
            let mut map: [usize; N] = std::array::from_fn(|i| i);
            for &(a, b) in mirror.iter() {
                map.swap(a, b);
            }
            preserved(&map, "mirror")?;
        }
        Ok(())
    }

    fn validate_windows(&self) -> Result<(), TopologyError> {
        for (index, window) in self.windows.iter().enumerate() {
            let mut seen = [false; N];
            for &position in window.iter() {
                check_position("window", position, N)?;
                if std::mem::replace(&mut seen[position], true) {
                    return Err(TopologyError::RepeatedWindowPosition {
                        window: index,
                        position,
                    });
                }
            }
        }
        Ok(())
    }

    fn validate_rotation(&self) -> Result<(), TopologyError> {
        let mut seen = [false; N];
        for &position in &self.rotation {
            check_position("rotation", position, N)?;
            if std::mem::replace(&mut seen[position], true) {
                return Err(TopologyError::RotationNotPermutation { position });
            }
        }

        let identity: [usize; N] = std::array::from_fn(|i| i);
        let mut current = identity;
        let mut actual = 0;
        loop {
            current = std::array::from_fn(|i| current[self.rotation[i]]);
            actual += 1;
            if current == identity {
                break;
            }
        }
        if actual != self.rotation_order {
            return Err(TopologyError::RotationOrderMismatch {
                declared: self.rotation_order,
                actual,
            });
        }
        Ok(())
    }

    fn validate_mirrors(&self) -> Result<(), TopologyError> {
        for (index, mirror) in self.mirrors.iter().enumerate() {
            let mut seen = [false; N];
            for &(a, b) in mirror.iter() {
                check_position("mirror", a, N)?;
                check_position("mirror", b, N)?;
                for position in [a, b] {
                    if std::mem::replace(&mut seen[position], true) {
                        return Err(TopologyError::MirrorNotInvolution {
                            mirror: index,
                            position,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

fn check_position(table: &'static str, position: usize, positions: usize) -> Result<(), TopologyError> {
    if position >= positions {
        return Err(TopologyError::PositionOutOfRange {
            table,
            position,
            positions,
        });
    }
    Ok(())
}

fn sorted(positions: &[usize]) -> Vec<usize> {
    let mut positions = positions.to_vec();
    positions.sort_unstable();
    positions
}
