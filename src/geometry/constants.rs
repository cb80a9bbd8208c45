// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time tables for the magic star.
//!
//! Positions are numbered along the two triangles:
//!
//! ```text
//! First triangle:  0, 1, 2, 3 <-> 3, 4, 5, 6 <-> 6, 7, 8, 0
//! Second triangle: 9, 2, 4, 10 <-> 10, 5, 7, 11 <-> 11, 8, 1, 9
//! ```
//!
//! Every position lies on exactly two windows, so with the values 1..12 each
//! window must sum to `2 * 78 / 6 = 26`.

/// Number of positions on the star.
pub const NPOSITIONS: usize = 12;

/// Number of constraint windows.
pub const NWINDOWS: usize = 6;

/// Required sum of every window.
pub const TARGET_SUM: u32 = 26;

/// The stones placed on the star, in input order.
pub const STONES: [u32; NPOSITIONS] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// The six lines of four positions.
pub const STAR_WINDOWS: [&[usize]; NWINDOWS] = [
    &[0, 1, 2, 3],
    &[3, 4, 5, 6],
    &[6, 7, 8, 0],
    &[9, 2, 4, 10],
    &[10, 5, 7, 11],
    &[11, 8, 1, 9],
];

/// Rotation of the star: the value at position `i` moves in from `STAR_ROTATION[i]`.
pub const STAR_ROTATION: [usize; NPOSITIONS] = [9, 2, 4, 10, 5, 7, 11, 8, 1, 3, 6, 0];

/// Applying [`STAR_ROTATION`] this many times gives the identity.
pub const STAR_ROTATION_ORDER: usize = 6;

/// Reflection about the axis through positions 0 and 10.
pub const MIRROR_LONG_AXIS: [(usize, usize); 5] = [(1, 8), (2, 7), (3, 6), (4, 5), (9, 11)];

/// Reflection about the axis through positions 4 and 8.
pub const MIRROR_SHORT_AXIS: [(usize, usize); 5] = [(0, 11), (1, 7), (2, 5), (3, 10), (6, 9)];

/// Variants produced per orbit: (identity + 2 mirrors) x 6 rotations.
pub const ORBIT_SIZE: usize = 3 * STAR_ROTATION_ORDER;

/// Size of the full search space, 12!.
pub const SEARCH_SPACE: u64 = factorial(NPOSITIONS as u64);

/// Compute factorial at compile time.
pub const fn factorial(n: u64) -> u64 {
    match n {
        0 | 1 => 1,
        _ => n * factorial(n - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_space() {
        assert_eq!(SEARCH_SPACE, 479_001_600);
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(4), 24);
    }

    #[test]
    fn test_every_position_on_two_windows() {
        let mut seen = [0; NPOSITIONS];
        for window in STAR_WINDOWS {
            for &position in window {
                seen[position] += 1;
            }
        }
        assert_eq!(seen, [2; NPOSITIONS]);
    }

    #[test]
    fn test_target_sum_matches_stones() {
        let total: u32 = STONES.iter().sum();
        assert_eq!(2 * total, TARGET_SUM * NWINDOWS as u32);
    }
}
