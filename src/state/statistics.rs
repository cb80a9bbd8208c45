// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters maintained by the search. They are observational only and never
//! affect which solutions are reported.

use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(EnumCountMacro, EnumIter, IntoStaticStr, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Permutations taken from the generator.
    Examined,
    /// Permutations whose windows all hit the target sum.
    Valid,
    /// Valid permutations with no symmetric twin found earlier.
    UniqueValid,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Overwrite a counter, e.g. after merging shard results.
    pub fn set(&mut self, counter: Counters, value: u64) {
        self.stats[counter as usize] = value;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Add every counter of `other` to this one.
    pub fn absorb(&mut self, other: &Statistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_counters_start_at_zero() {
        let statistics = Statistics::new();
        for counter in Counters::iter() {
            assert_eq!(statistics.get(counter), 0);
        }
    }

    #[test]
    fn test_increment_and_absorb() {
        let mut a = Statistics::new();
        a.increment(Counters::Examined);
        a.increment(Counters::Examined);
        a.increment(Counters::Valid);

        let mut b = Statistics::new();
        b.increment(Counters::Examined);
        b.increment(Counters::UniqueValid);

        a.absorb(&b);
        assert_eq!(a.get(Counters::Examined), 3);
        assert_eq!(a.get(Counters::Valid), 1);
        assert_eq!(a.get(Counters::UniqueValid), 1);

        a.set(Counters::UniqueValid, 7);
        assert_eq!(a.get(Counters::UniqueValid), 7);
    }

    #[test]
    fn test_counter_names() {
        let name: &'static str = Counters::UniqueValid.into();
        assert_eq!(name, "UniqueValid");
    }
}
