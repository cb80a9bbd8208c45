// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Known magic star solutions and their symmetric twins.
//!
//! The first and last representatives below are the first and last orbits
//! met by the full search, in discovery order.

use magic_star::geometry::{Arrangement, ORBIT_SIZE, STAR, TARGET_SUM};
use magic_star::symmetry::{orbit, KnownSolutions};
use std::collections::HashSet;

const KNOWN_SOLUTIONS: &[[u32; 12]] = &[
    [1, 2, 11, 12, 3, 5, 6, 10, 9, 8, 4, 7],
    [1, 2, 11, 12, 4, 3, 7, 8, 10, 5, 6, 9],
    [1, 2, 12, 11, 3, 4, 8, 7, 10, 5, 6, 9],
    [1, 2, 12, 11, 4, 5, 6, 10, 9, 7, 3, 8],
    [1, 3, 10, 12, 2, 4, 8, 6, 11, 5, 9, 7],
    [5, 2, 10, 9, 1, 4, 12, 3, 6, 7, 8, 11],
    [5, 3, 7, 11, 1, 4, 10, 2, 9, 6, 12, 8],
    [6, 1, 9, 10, 2, 3, 11, 4, 5, 8, 7, 12],
];

fn arrangements() -> Vec<Arrangement<12>> {
    KNOWN_SOLUTIONS.iter().copied().map(Arrangement::new).collect()
}

#[test]
fn test_known_solutions_hit_target() {
    for solution in arrangements() {
        assert!(STAR.is_valid(&solution), "{}", solution);
        assert!(STAR.window_sums(&solution).iter().all(|&s| s == TARGET_SUM));
    }
}

#[test]
fn test_every_variant_is_valid() {
    for solution in arrangements() {
        let variants = orbit(&STAR, &solution);
        assert_eq!(variants.len(), ORBIT_SIZE);
        for variant in &variants {
            assert!(STAR.is_valid(variant), "{} is a twin of {}", variant, solution);
        }
    }
}

#[test]
fn test_known_solutions_are_distinct_orbits() {
    let mut seen = HashSet::new();
    for solution in arrangements() {
        let variants: HashSet<_> = orbit(&STAR, &solution).into_iter().collect();
        assert_eq!(variants.len(), 12);
        assert!(seen.is_disjoint(&variants), "{} repeats an orbit", solution);
        seen.extend(variants);
    }
}

#[test]
fn test_dedup_keeps_one_per_orbit() {
    let mut known = KnownSolutions::new();
    // Feed every twin of every solution, twins first.
    for solution in arrangements() {
        let mut variants = orbit(&STAR, &solution);
        variants.reverse();
        for variant in variants {
            known.insert_if_new(&STAR, &variant);
        }
    }
    assert_eq!(known.len(), KNOWN_SOLUTIONS.len());

    let representatives: Vec<_> = known.iter().collect();
    for (i, a) in representatives.iter().enumerate() {
        let twins = orbit(&STAR, a);
        for b in &representatives[i + 1..] {
            assert!(!twins.contains(b));
        }
    }
}

#[test]
fn test_serialized_form() {
    let first = Arrangement::new(KNOWN_SOLUTIONS[0]);
    assert_eq!(first.to_string(), "1, 2, 11, 12, 3, 5, 6, 10, 9, 8, 4, 7");
}
