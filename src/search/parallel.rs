// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sharded search over disjoint ranges of the counter space.
//!
//! Fixing the first `depth` counters splits the permutations into shards that
//! can be searched independently, each with its own generator and its own
//! set of representatives. The only shared data are the elements and the
//! topology, both read-only.
//!
//! A representative in one shard may be a symmetric twin of a representative
//! in another, so [`merge`] deduplicates again. Shards are merged in prefix
//! order and each shard lists its representatives in discovery order, so the
//! merged result is exactly what the sequential search reports.

use super::{NoopObserver, SearchOutcome, StarSearch};
use crate::error::ShardError;
use crate::geometry::Topology;
use crate::state::{Counters, Statistics};
use crate::symmetry::KnownSolutions;
use itertools::Itertools;
use rayon::prelude::*;
use std::time::Instant;

/// Every prefix of `depth` distinct counters below `positions`, in
/// lexicographic order.
pub fn shard_prefixes(positions: usize, depth: usize) -> Result<Vec<Vec<usize>>, ShardError> {
    if depth > positions {
        return Err(ShardError::PrefixTooLong {
            length: depth,
            positions,
        });
    }
    Ok((0..positions).permutations(depth).collect())
}

/// Search every shard of depth `depth` on a pool of `threads` workers and
/// merge the results.
pub fn search_parallel<const N: usize>(
    topology: &Topology<N>,
    elements: [u32; N],
    depth: usize,
    threads: usize,
) -> Result<SearchOutcome<N>, ShardError> {
    let prefixes = shard_prefixes(N, depth)?;
    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
    log::info!(
        "Searching {} shards of depth {} on {} threads",
        prefixes.len(),
        depth,
        pool.current_num_threads()
    );

    let start = Instant::now();
    let outcomes = pool.install(|| {
        prefixes
            .par_iter()
            .map(|prefix| -> Result<SearchOutcome<N>, ShardError> {
                let outcome = StarSearch::shard(topology, elements, prefix)?.run(&mut NoopObserver);
                log::debug!(
                    "Shard {:?}: {} valid, {} unique in {}ms",
                    prefix,
                    outcome.statistics.get(Counters::Valid),
                    outcome.solutions.len(),
                    outcome.elapsed.as_millis()
                );
                Ok(outcome)
            })
            .collect::<Result<Vec<_>, ShardError>>()
    })?;

    let mut merged = merge(topology, outcomes);
    merged.elapsed = start.elapsed();
    Ok(merged)
}

/// Combine shard results given in prefix order.
///
/// Counters are summed, except the unique count, which is recomputed after
/// deduplicating across shards. The elapsed time is the sum of shard times.
pub fn merge<const N: usize>(
    topology: &Topology<N>,
    outcomes: impl IntoIterator<Item = SearchOutcome<N>>,
) -> SearchOutcome<N> {
    let mut statistics = Statistics::new();
    let mut known = KnownSolutions::new();
    let mut elapsed = std::time::Duration::ZERO;

    for outcome in outcomes {
        statistics.absorb(&outcome.statistics);
        elapsed += outcome.elapsed;
        for solution in &outcome.solutions {
            known.insert_if_new(topology, solution);
        }
    }
    statistics.set(Counters::UniqueValid, known.len() as u64);

    SearchOutcome {
        statistics,
        solutions: known.into_vec(),
        elapsed,
    }
}
