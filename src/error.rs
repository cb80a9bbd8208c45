// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for topology validation and sharded search.
//!
//! Generator bookkeeping failures are not represented here: they indicate a
//! broken invariant and panic instead.

use thiserror::Error;

/// Reasons a [`Topology`](crate::geometry::Topology) table is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// A window or transform refers to a position outside `0..positions`.
    #[error("{table} refers to position {position}, but the layout has only {positions} positions")]
    PositionOutOfRange {
        table: &'static str,
        position: usize,
        positions: usize,
    },

    /// A window lists the same position twice.
    #[error("window {window} repeats position {position}")]
    RepeatedWindowPosition { window: usize, position: usize },

    /// The rotation map sends two positions to the same place.
    #[error("rotation is not a permutation: position {position} is used twice")]
    RotationNotPermutation { position: usize },

    /// Applying the rotation `order` times does not return to the identity,
    /// or it does so earlier.
    #[error("rotation has order {actual}, but the table declares {declared}")]
    RotationOrderMismatch { declared: usize, actual: usize },

    /// A mirror touches the same position in two swap pairs (or swaps a
    /// position with itself), so it is not an involution.
    #[error("mirror {mirror} is not an involution: position {position} is swapped twice")]
    MirrorNotInvolution { mirror: usize, position: usize },

    /// A transform maps some window onto a set of positions that is not a window.
    #[error("{transform} does not preserve the windows: window {window} has no image")]
    NotASymmetry {
        transform: &'static str,
        window: usize,
    },
}

/// Reasons a shard of the counter space cannot be searched.
#[derive(Debug, Error)]
pub enum ShardError {
    /// More counters fixed than there are positions.
    #[error("prefix fixes {length} counters, but there are only {positions} positions")]
    PrefixTooLong { length: usize, positions: usize },

    /// A fixed counter does not index the element array.
    #[error("prefix counter {counter} is out of range for {positions} elements")]
    CounterOutOfRange { counter: usize, positions: usize },

    /// A fixed counter appears twice in the prefix.
    #[error("prefix repeats counter {counter}")]
    RepeatedCounter { counter: usize },

    /// The worker pool for a parallel search could not be started.
    #[error("could not start the search thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
