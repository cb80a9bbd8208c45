// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive search driver.
//!
//! The driver pulls permutations from the generator until it is exhausted.
//! Every permutation is checked against the windows; every valid one is
//! expanded to its orbit and kept only if no variant is already known.
//!
//! ```text
//!            next permutation
//!   RUNNING ------------------> validate -> orbit -> dedup
//!      |  ^__________________________________________|
//!      | generator reports the last permutation
//!      v
//!  EXHAUSTED
//! ```
//!
//! # Example
//!
//! ```
//! use magic_star::geometry::Topology;
//! use magic_star::search::{NoopObserver, StarSearch};
//! use magic_star::state::Counters;
//!
//! // A ring of four positions with one window holding everything.
//! const RING: Topology<4> = Topology {
//!     windows: &[&[0, 1, 2, 3]],
//!     target_sum: 10,
//!     rotation: [1, 2, 3, 0],
//!     rotation_order: 4,
//!     mirrors: &[&[(1, 3)]],
//! };
//!
//! let outcome = StarSearch::new(&RING, [1, 2, 3, 4]).run(&mut NoopObserver);
//! assert_eq!(outcome.statistics.get(Counters::Examined), 24);
//! assert_eq!(outcome.solutions.len(), 3);
//! ```

pub mod parallel;

use crate::error::ShardError;
use crate::geometry::{Arrangement, Topology};
use crate::permutations::Permutations;
use crate::state::{Counters, Statistics};
use crate::symmetry::KnownSolutions;
use std::time::{Duration, Instant};

/// Permutations between two progress reports of the binary.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 25_000_000;

/// Driver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Exhausted,
}

/// Hooks called by the driver. Both default to doing nothing.
pub trait SearchObserver<const N: usize> {
    /// Called after each permutation has been counted, validated and, if
    /// valid, deduplicated.
    fn on_permutation(&mut self, _statistics: &Statistics, _arrangement: &Arrangement<N>, _valid: bool) {}

    /// Called once, after the last permutation.
    fn on_finish(&mut self, _statistics: &Statistics, _elapsed: Duration) {}

    /// Name for logging.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl<const N: usize> SearchObserver<N> for NoopObserver {
    fn name(&self) -> &str {
        "Noop"
    }
}

/// Result of a finished search.
#[derive(Debug, Clone)]
pub struct SearchOutcome<const N: usize> {
    pub statistics: Statistics,
    /// One representative per orbit, in discovery order.
    pub solutions: Vec<Arrangement<N>>,
    pub elapsed: Duration,
}

/// Search over all permutations of `elements`, or over one shard of them.
pub struct StarSearch<'t, const N: usize> {
    topology: &'t Topology<N>,
    generator: Permutations<N>,
    known: KnownSolutions<N>,
    statistics: Statistics,
    current: Arrangement<N>,
    state: SearchState,
}

impl<'t, const N: usize> StarSearch<'t, N> {
    pub fn new(topology: &'t Topology<N>, elements: [u32; N]) -> Self {
        Self::with_generator(topology, elements, Permutations::new(elements))
    }

    /// Search only the permutations whose first counters are `prefix`.
    pub fn shard(topology: &'t Topology<N>, elements: [u32; N], prefix: &[usize]) -> Result<Self, ShardError> {
        let generator = Permutations::with_prefix(elements, prefix)?;
        Ok(Self::with_generator(topology, elements, generator))
    }

    fn with_generator(topology: &'t Topology<N>, elements: [u32; N], generator: Permutations<N>) -> Self {
        Self {
            topology,
            generator,
            known: KnownSolutions::new(),
            statistics: Statistics::new(),
            current: Arrangement::new(elements),
            state: SearchState::Running,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Process one permutation. Does nothing once exhausted.
    pub fn step(&mut self, observer: &mut dyn SearchObserver<N>) -> SearchState {
        if self.state == SearchState::Exhausted {
            return self.state;
        }

        let has_next = self.generator.next_into(&mut self.current);
        self.statistics.increment(Counters::Examined);

        let valid = self.topology.is_valid(&self.current);
        if valid {
            self.statistics.increment(Counters::Valid);
            if self.known.insert_if_new(self.topology, &self.current) {
                self.statistics.increment(Counters::UniqueValid);
            }
        }
        observer.on_permutation(&self.statistics, &self.current, valid);

        if !has_next {
            self.state = SearchState::Exhausted;
        }
        self.state
    }

    /// Run to exhaustion.
    pub fn run(mut self, observer: &mut dyn SearchObserver<N>) -> SearchOutcome<N> {
        log::debug!("Starting search with observer {}", observer.name());
        let start = Instant::now();
        while self.step(observer) == SearchState::Running {}
        let elapsed = start.elapsed();

        observer.on_finish(&self.statistics, elapsed);
        log::debug!(
            "Search exhausted after {} permutations: {} valid, {} unique",
            self.statistics.get(Counters::Examined),
            self.statistics.get(Counters::Valid),
            self.statistics.get(Counters::UniqueValid)
        );

        SearchOutcome {
            statistics: self.statistics,
            solutions: self.known.into_vec(),
            elapsed,
        }
    }
}
