// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive search for magic star arrangements.
//!
//! The numbers 1..12 are placed on the twelve positions of a hexagram so that
//! each of the six lines of four positions sums to 26. Every one of the 12!
//! orderings is generated and checked; solutions that are rotations or
//! reflections of one found earlier are dropped.
//!
//! # Architecture
//!
//! ## Static configuration
//!
//! - `geometry::constants`: windows, rotation and mirror tables of the star
//! - `geometry::Topology`: the same tables as a value, so smaller layouts can
//!   be searched with the same code
//!
//! ## Search
//!
//! 1. **Permutations**: lexicographic generator over a counter array
//! 2. **Topology::is_valid**: six window sums against the target
//! 3. **symmetry::orbit**: the 18 rotated and reflected variants
//! 4. **KnownSolutions**: one representative per orbit
//!
//! `search::StarSearch` drives these in a loop and counts what it sees.
//!
//! # Parallelization
//!
//! The counter space splits into shards by fixing a prefix of counters.
//! `search::parallel` runs the shards on a rayon pool, each with its own set of
//! representatives, and deduplicates again when merging.
//!
//! # Example
//!
//! ```
//! use magic_star::geometry::{Arrangement, STAR};
//! use magic_star::symmetry::orbit;
//!
//! let solution = Arrangement::new([1, 2, 11, 12, 3, 5, 6, 10, 9, 8, 4, 7]);
//! assert!(STAR.is_valid(&solution));
//! assert!(orbit(&STAR, &solution).iter().all(|v| STAR.is_valid(v)));
//! ```

pub mod error;
pub mod geometry;
pub mod permutations;
pub mod search;
pub mod state;
pub mod symmetry;

// Re-export commonly used types
pub use error::{ShardError, TopologyError};
pub use geometry::{Arrangement, Topology, STAR};
pub use permutations::Permutations;
pub use search::{SearchObserver, SearchOutcome, StarSearch};
