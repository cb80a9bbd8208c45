// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Orbit of an arrangement under the layout's rotation and mirrors.

use crate::geometry::{Arrangement, Topology};

/// All rotations of the arrangement, then all rotations of each mirror image.
///
/// For the star this yields 18 variants: 3 base orientations times 6
/// rotations. The symmetry group of the star only has 12 elements, so some
/// variants repeat. That is harmless for membership tests and every element
/// of the group is present.
///
/// The caller's arrangement is not modified.
pub fn orbit<const N: usize>(topology: &Topology<N>, arrangement: &Arrangement<N>) -> Vec<Arrangement<N>> {
    let mut result = Vec::with_capacity(topology.orbit_size());

    push_rotations(topology, *arrangement, &mut result);
    for mirror in 0..topology.mirrors.len() {
        let mut reflected = *arrangement;
        topology.mirror(&mut reflected, mirror);
        push_rotations(topology, reflected, &mut result);
    }
    result
}

fn push_rotations<const N: usize>(
    topology: &Topology<N>,
    mut working: Arrangement<N>,
    result: &mut Vec<Arrangement<N>>,
) {
    result.push(working);
    for _ in 1..topology.rotation_order {
        topology.rotate(&mut working);
        result.push(working);
    }
}
