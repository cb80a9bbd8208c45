// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Small layouts shared across integration tests.
//!
//! They use the same kind of tables as the star but have few enough
//! permutations to check every result by hand.

#![allow(dead_code)]

use magic_star::geometry::Topology;

/// Four positions on a ring, one window covering all of them.
///
/// Every arrangement of 1..4 is valid. The ring's symmetry group (4
/// rotations, 4 reflections) leaves 24 / 8 = 3 distinct solutions.
pub const RING4: Topology<4> = Topology {
    windows: &[&[0, 1, 2, 3]],
    target_sum: 10,
    rotation: [1, 2, 3, 0],
    rotation_order: 4,
    mirrors: &[&[(1, 3)]],
};

/// Magic triangle: corners at 0, 2, 4 and side midpoints at 1, 3, 5.
///
/// ```text
///       0
///     5   1
///   4   3   2
/// ```
pub const fn triangle(target_sum: u32) -> Topology<6> {
    Topology {
        windows: &[&[0, 1, 2], &[2, 3, 4], &[4, 5, 0]],
        target_sum,
        rotation: [2, 3, 4, 5, 0, 1],
        rotation_order: 3,
        // Axis through corner 0, then axis through corner 2.
        mirrors: &[&[(1, 5), (2, 4)], &[(0, 4), (1, 3)]],
    }
}

pub const TRIANGLE_ELEMENTS: [u32; 6] = [1, 2, 3, 4, 5, 6];
