// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry reduction of solutions.
//!
//! Two arrangements are the same solution when one is a rotation or
//! reflection of the other. Rather than computing a canonical form, each new
//! solution is expanded to its orbit and checked against the representatives
//! found so far.
//!
//! ## Module Structure
//!
//! - `orbit`: variants under rotation and the mirrors
//! - `known`: the set of representatives

pub mod known;
pub mod orbit;

pub use known::KnownSolutions;
pub use orbit::orbit;
