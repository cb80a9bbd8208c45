// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generator, validator and orbit logic on layouts small enough to check by hand.

mod common;

use common::{triangle, RING4, TRIANGLE_ELEMENTS};
use magic_star::geometry::Arrangement;
use magic_star::search::parallel::{search_parallel, shard_prefixes};
use magic_star::search::{NoopObserver, StarSearch};
use magic_star::state::Counters;
use magic_star::symmetry::orbit;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

#[test]
fn test_toy_layouts_are_well_formed() {
    assert_eq!(RING4.validate(), Ok(()));
    for target in 9..=12 {
        assert_eq!(triangle(target).validate(), Ok(()));
    }
}

#[test]
fn test_ring_of_four() {
    let outcome = StarSearch::new(&RING4, [1, 2, 3, 4]).run(&mut NoopObserver);

    assert_eq!(outcome.statistics.get(Counters::Examined), 24);
    assert_eq!(outcome.statistics.get(Counters::Valid), 24);
    assert_eq!(outcome.statistics.get(Counters::UniqueValid), 3);
    assert_eq!(
        outcome.solutions,
        vec![
            Arrangement::new([1, 2, 3, 4]),
            Arrangement::new([1, 2, 4, 3]),
            Arrangement::new([1, 3, 2, 4]),
        ]
    );
}

#[test]
fn test_ring_orbits_partition_all_arrangements() {
    let outcome = StarSearch::new(&RING4, [1, 2, 3, 4]).run(&mut NoopObserver);
    let mut covered = HashSet::new();
    for solution in &outcome.solutions {
        let variants: HashSet<_> = orbit(&RING4, solution).into_iter().collect();
        assert_eq!(variants.len(), 8);
        assert!(covered.is_disjoint(&variants));
        covered.extend(variants);
    }
    assert_eq!(covered.len(), 24);
}

#[test]
fn test_magic_triangles() {
    let expected = [
        (9, [1, 5, 3, 4, 2, 6]),
        (10, [1, 4, 5, 2, 3, 6]),
        (11, [2, 3, 6, 1, 4, 5]),
        (12, [4, 2, 6, 1, 5, 3]),
    ];
    for (target, solution) in expected {
        let topology = triangle(target);
        let outcome = StarSearch::new(&topology, TRIANGLE_ELEMENTS).run(&mut NoopObserver);

        assert_eq!(outcome.statistics.get(Counters::Examined), 720);
        assert_eq!(outcome.statistics.get(Counters::Valid), 6, "target {}", target);
        assert_eq!(outcome.solutions, vec![Arrangement::new(solution)], "target {}", target);
    }
}

#[test]
fn test_impossible_target() {
    let topology = triangle(8);
    let outcome = StarSearch::new(&topology, TRIANGLE_ELEMENTS).run(&mut NoopObserver);
    assert_eq!(outcome.statistics.get(Counters::Valid), 0);
    assert!(outcome.solutions.is_empty());
}

#[test]
fn test_triangle_orbit() {
    let topology = triangle(9);
    let solution = Arrangement::new([1, 5, 3, 4, 2, 6]);
    let variants = orbit(&topology, &solution);
    assert_eq!(variants.len(), 9);
    assert!(variants.iter().all(|v| topology.is_valid(v)));
    let distinct: HashSet<_> = variants.into_iter().collect();
    assert_eq!(distinct.len(), 6);
}

#[test]
fn test_parallel_matches_sequential() {
    let topology = triangle(10);
    let sequential = StarSearch::new(&topology, TRIANGLE_ELEMENTS).run(&mut NoopObserver);

    for depth in 0..=3 {
        let parallel = search_parallel(&topology, TRIANGLE_ELEMENTS, depth, 2).unwrap();
        assert_eq!(parallel.solutions, sequential.solutions, "depth {}", depth);
        assert_eq!(parallel.statistics, sequential.statistics, "depth {}", depth);
    }
}

#[test]
fn test_parallel_ring_matches_sequential() {
    let sequential = StarSearch::new(&RING4, [1, 2, 3, 4]).run(&mut NoopObserver);
    let parallel = search_parallel(&RING4, [1, 2, 3, 4], 2, 3).unwrap();
    assert_eq!(parallel.solutions, sequential.solutions);
    assert_eq!(shard_prefixes(4, 2).unwrap().len(), 12);
}

#[test]
fn test_parallel_rejects_deep_shards() {
    assert!(search_parallel(&RING4, [1, 2, 3, 4], 5, 1).is_err());
}
