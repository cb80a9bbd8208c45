// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Layout of the magic star.
//!
//! - Arrangement: values placed on positions
//! - Topology: windows, target sum, rotation and mirrors
//! - constants: the star's tables

pub mod arrangement;
pub mod constants;
pub mod topology;

// Re-export for convenience
pub use arrangement::Arrangement;
pub use constants::*;
pub use topology::{Topology, STAR};
